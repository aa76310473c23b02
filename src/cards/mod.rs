//! Card types for the two decks.
//!
//! - `PlayerCard`: location cards, event cards and epidemic markers
//! - `InfectionCard`: one per location, names where cubes land

pub mod definition;

pub use definition::{InfectionCard, PlayerCard};
