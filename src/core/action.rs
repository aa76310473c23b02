//! Player actions and their outcomes.
//!
//! The vocabulary is fixed. Each action names the sub-state it is legal in;
//! the turn state machine applies it only when that name matches the active
//! sub-state and the caller is the sub-state's acting player.
//!
//! Actions serialize with a `name` tag, so hosts can accept them as JSON:
//!
//! ```
//! use outbreak_engine::core::Action;
//!
//! let action: Action = serde_json::from_str(r#"{"name":"draw_player_card"}"#).unwrap();
//! assert_eq!(action, Action::DrawPlayerCard);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Action {
    /// Spend one action doing nothing.
    ActionPass,
    /// Draw the top card of the player deck.
    DrawPlayerCard,
    /// Resolve an epidemic by restacking the infection discard pile.
    IncreaseInfectionIntensity,
    /// Draw and resolve one infection card.
    DrawInfectionCard,
}

impl Action {
    /// All actions, in vocabulary order.
    pub const ALL: [Action; 4] = [
        Action::ActionPass,
        Action::DrawPlayerCard,
        Action::IncreaseInfectionIntensity,
        Action::DrawInfectionCard,
    ];

    /// Wire name of the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::ActionPass => "action_pass",
            Action::DrawPlayerCard => "draw_player_card",
            Action::IncreaseInfectionIntensity => "increase_infection_intensity",
            Action::DrawInfectionCard => "draw_infection_card",
        }
    }

    /// Name of the sub-state this action is legal in.
    #[must_use]
    pub const fn required_state(self) -> &'static str {
        match self {
            Action::ActionPass => "player_actions",
            Action::DrawPlayerCard => "draw_player_cards",
            Action::IncreaseInfectionIntensity => "epidemic",
            Action::DrawInfectionCard => "draw_infection_cards",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an action was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// The active sub-state doesn't accept this action.
    WrongState {
        /// Sub-state the action needs.
        required: &'static str,
        /// Sub-state that is active.
        actual: &'static str,
    },
    /// Another player is due to act.
    WrongPlayer {
        /// Player the sub-state is waiting for.
        expected: PlayerId,
        /// Player who tried to act.
        actual: PlayerId,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::WrongState { required, actual } => {
                write!(f, "action needs state {required}, current state is {actual}")
            }
            Rejection::WrongPlayer { expected, actual } => {
                write!(f, "{actual} acted but {expected} is due")
            }
        }
    }
}

/// Result of a well-formed `act` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    /// The action was applied and its events emitted.
    Accepted,
    /// Nothing changed and nothing was emitted; re-prompt the player.
    Rejected(Rejection),
}

impl ActionOutcome {
    /// Check if the action was applied.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ActionOutcome::Accepted)
    }
}
