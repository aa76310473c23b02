//! Engine and definition errors.
//!
//! Illegal player actions are not errors; they come back as
//! [`ActionOutcome::Rejected`](super::ActionOutcome). Losing the game is not
//! an error either. What remains is harness misuse, a broken game
//! definition, or a situation that contradicts itself.

use super::player::PlayerId;

/// Problems found while validating a game definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("location {location} spreads unknown disease {disease}")]
    UnknownLocationDisease { location: String, disease: String },

    #[error("location {location} lists unknown neighbour {neighbour}")]
    UnknownNeighbour { location: String, neighbour: String },

    #[error("starting location {0} is not on the board")]
    UnknownStartingLocation(String),

    #[error("infection card names unknown location {0}")]
    UnknownInfectionLocation(String),

    #[error("infection rate table is empty or index {index} is out of range")]
    BadInfectionRate { index: usize },

    #[error("no initial hand size for {0} players")]
    MissingHandSize(usize),

    #[error("research center pool is empty")]
    NoResearchCenters,

    #[error("initial deal needs {needed} player cards, deck has {available}")]
    NotEnoughPlayerCards { needed: usize, available: usize },

    #[error("no players")]
    NoPlayers,

    #[error("player id {0} appears more than once")]
    DuplicatePlayer(u32),
}

/// Errors surfaced by [`Game`](crate::rules::Game).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("setup has not run")]
    NotSetUp,

    #[error("setup already ran")]
    AlreadySetUp,

    #[error("engine stopped after a consistency fault")]
    Faulted,

    #[error("epidemic interrupted {parent}, expected draw_player_cards")]
    CorruptEpidemicParent { parent: &'static str },

    #[error("infection draw pile is empty")]
    InfectionDeckExhausted,

    #[error("unknown location {0}")]
    UnknownLocation(String),

    #[error("unknown disease {0}")]
    UnknownDisease(String),

    #[error("{0} is not seated at this game")]
    UnknownPlayer(PlayerId),

    #[error("invalid game definition: {0}")]
    Definition(#[from] DefinitionError),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Check if the error means the session can't continue.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EngineError::Faulted
                | EngineError::CorruptEpidemicParent { .. }
                | EngineError::InfectionDeckExhausted
                | EngineError::UnknownLocation(_)
                | EngineError::UnknownDisease(_)
                | EngineError::UnknownPlayer(_)
        )
    }
}
