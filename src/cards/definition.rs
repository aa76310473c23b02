//! Card definitions.
//!
//! Cards are plain values: the decks hold them directly and events carry
//! copies. Both types serialize with a `type` tag matching the JSON game
//! definition format.

use serde::{Deserialize, Serialize};

/// A card in the player deck.
///
/// ## Example
///
/// ```
/// use outbreak_engine::cards::PlayerCard;
///
/// let card: PlayerCard =
///     serde_json::from_str(r#"{"type":"location","location":"Paris"}"#).unwrap();
/// assert_eq!(card.location(), Some("Paris"));
/// assert!(!card.is_epidemic());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerCard {
    /// A card tied to a location on the board.
    Location {
        /// Name of the location.
        location: String,
    },
    /// A one-shot special card.
    Event {
        /// Card name.
        name: String,
    },
    /// Epidemic marker spliced into the deck at setup.
    Epidemic,
}

impl PlayerCard {
    /// Create a location card.
    #[must_use]
    pub fn location_card(location: impl Into<String>) -> Self {
        PlayerCard::Location {
            location: location.into(),
        }
    }

    /// Create an event card.
    #[must_use]
    pub fn event(name: impl Into<String>) -> Self {
        PlayerCard::Event { name: name.into() }
    }

    /// Check if this is an epidemic marker.
    #[must_use]
    pub fn is_epidemic(&self) -> bool {
        matches!(self, PlayerCard::Epidemic)
    }

    /// Location named by the card, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            PlayerCard::Location { location } => Some(location),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerCard::Location { location } => write!(f, "Location({location})"),
            PlayerCard::Event { name } => write!(f, "Event({name})"),
            PlayerCard::Epidemic => f.write_str("Epidemic"),
        }
    }
}

/// A card in the infection deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfectionCard {
    /// Location that receives cubes when this card is drawn.
    pub location: String,
}

impl InfectionCard {
    /// Create an infection card for a location.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl std::fmt::Display for InfectionCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Infection({})", self.location)
    }
}
