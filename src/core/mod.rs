//! Core engine types: players, actions, state, randomness, configuration.
//!
//! Everything the rule modules share lives here. None of it mutates a game
//! on its own; `rules::Game` is the only thing that does.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionOutcome, Rejection};
pub use config::{GameDefinition, Role, Settings};
pub use error::{DefinitionError, EngineError};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState, IdentityRng, Randomness};
pub use state::{Situation, TurnState, ACTIONS_PER_TURN, PLAYER_DRAWS_PER_TURN};
