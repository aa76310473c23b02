//! Game event taxonomy.

use serde::{Deserialize, Serialize};

use crate::cards::{InfectionCard, PlayerCard};
use crate::core::{PlayerId, Situation, TurnState};

/// Something that happened during a game.
///
/// Serialized with an `event_type` tag. Payloads are owned copies; nothing
/// here aliases the engine's live state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Snapshot of the freshly built board, before initial infections.
    InitialSituation { situation: Box<Situation> },

    /// The active sub-state changed.
    StateChange { state: TurnState },

    /// A player drew a player card (epidemics included).
    DrawPlayerCard { player: PlayerId, card: PlayerCard },

    /// An epidemic moved the infection-rate marker.
    InfectionRateIncreased {
        infection_rate_index: usize,
        rate: u32,
    },

    /// An infection card was drawn and put on the discard pile.
    DrawAndDiscardInfectionCard { card: InfectionCard },

    /// A location overflowed and spread to its neighbours.
    Outbreak { location: String, disease: String },

    /// One cube was placed.
    Infect { location: String, disease: String },

    /// The infection discard pile was shuffled back on top of the draw pile.
    InfectionCardsRestack { cards: Vec<InfectionCard> },
}

impl GameEvent {
    /// Wire name of the event.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            GameEvent::InitialSituation { .. } => "initial_situation",
            GameEvent::StateChange { .. } => "state_change",
            GameEvent::DrawPlayerCard { .. } => "draw_player_card",
            GameEvent::InfectionRateIncreased { .. } => "infection_rate_increased",
            GameEvent::DrawAndDiscardInfectionCard { .. } => "draw_and_discard_infection_card",
            GameEvent::Outbreak { .. } => "outbreak",
            GameEvent::Infect { .. } => "infect",
            GameEvent::InfectionCardsRestack { .. } => "infection_cards_restack",
        }
    }

    /// Create a state change event from a borrowed state.
    #[must_use]
    pub fn state_change(state: &TurnState) -> Self {
        GameEvent::StateChange {
            state: state.clone(),
        }
    }

    /// The new sub-state, if this is a state change.
    #[must_use]
    pub fn as_state_change(&self) -> Option<&TurnState> {
        match self {
            GameEvent::StateChange { state } => Some(state),
            _ => None,
        }
    }
}
