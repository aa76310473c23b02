//! Deck manager.
//!
//! - Player deck: shuffled once at setup, then epidemic markers are spliced
//!   into equal-sized chunks of everything past the initial deal
//! - Infection deck: draws from either end, a discard pile kept most recent
//!   first, and the epidemic restack that puts the shuffled discards back on
//!   top
//!
//! Piles are `im::Vector`s with the top of the pile at index 0.

mod infection;
mod player;

pub use infection::{draw_infection_card, restack_infection_discard, DrawEnd};
pub use player::{build_player_deck, chunk_layout, insert_epidemics, DeckLayout};
