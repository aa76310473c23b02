//! # outbreak-engine
//!
//! A deterministic rules engine for a cooperative disease-outbreak board
//! game.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: [`Game`] owns the situation and is the only thing
//!    that mutates it. Observers see clones carried by events.
//!
//! 2. **Injected Capabilities**: Randomness and the event sink are handed
//!    in at construction. With [`IdentityRng`] a whole game is predictable
//!    to the card.
//!
//! 3. **Rejections Are Data**: An illegal action comes back as
//!    [`ActionOutcome::Rejected`] and changes nothing. Only a corrupt
//!    situation is an error.
//!
//! ## Architecture
//!
//! - **Turn State Machine**: Exactly one sub-state is active and it names
//!   the one action that is legal. Epidemics interrupt the player draw and
//!   remember where to resume.
//!
//! - **Persistent Data Structures**: Card piles are `im` vectors, so the
//!   `initial_situation` snapshot clones cheaply.
//!
//! ## Modules
//!
//! - `core`: Player ids, actions, sub-states, situation, RNG, configuration
//! - `board`: Locations, diseases, research centers, infection-rate track
//! - `cards`: Player and infection cards
//! - `decks`: Player deck construction and infection pile operations
//! - `events`: Event taxonomy and sinks
//! - `rules`: The `Game` engine, setup and infection resolution
//! - `games`: Definition builder and a sample board

pub mod board;
pub mod cards;
pub mod core;
pub mod decks;
pub mod events;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, DefinitionError, EngineError, GameDefinition, GameRng, IdentityRng,
    Player, PlayerId, Randomness, Rejection, Settings, Situation, TurnState,
};

pub use crate::board::{Disease, InfectionRateLevel, Location, ResearchCenter};

pub use crate::cards::{InfectionCard, PlayerCard};

pub use crate::events::{EventSink, GameEvent};

pub use crate::rules::{DefeatReason, Game};
