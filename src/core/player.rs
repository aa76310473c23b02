//! Player identification and per-player board data.
//!
//! ## PlayerId
//!
//! Opaque identifier supplied by the host. The engine never interprets it
//! beyond equality; turn order is the order of the list passed to
//! [`Game::new`](crate::rules::Game::new).
//!
//! ## Player
//!
//! Role, pawn location and hand of one participant.

use serde::{Deserialize, Serialize};

use crate::cards::PlayerCard;

/// Host-assigned player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Host-assigned identifier.
    pub id: PlayerId,

    /// Role drawn at setup. `None` when the role pool ran out.
    pub role: Option<String>,

    /// Name of the location the pawn stands on.
    pub location: String,

    /// Cards in hand. Order carries no meaning.
    pub hand: Vec<PlayerCard>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, role: Option<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            role,
            location: location.into(),
            hand: Vec::new(),
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
