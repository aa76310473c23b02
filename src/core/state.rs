//! Game state: the active sub-state and the mutable situation.
//!
//! ## TurnState
//!
//! Tagged variant naming the one kind of action currently legal. Terminal
//! variants name no action at all.
//!
//! ## Situation
//!
//! The whole board: players, cubes, supplies, decks, counters. Created once
//! by setup and owned exclusively by the engine; observers only ever see
//! clones carried by events.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameDefinition;
use super::player::{Player, PlayerId};
use crate::board::{Disease, InfectionRateLevel, Location, ResearchCenter};
use crate::cards::{InfectionCard, PlayerCard};

/// Actions a player takes per turn before drawing.
pub const ACTIONS_PER_TURN: u32 = 4;

/// Player cards drawn at the end of each turn.
pub const PLAYER_DRAWS_PER_TURN: u32 = 2;

/// The active sub-state.
///
/// ## Example
///
/// ```
/// use outbreak_engine::core::{PlayerId, TurnState};
///
/// let state = TurnState::player_actions(PlayerId::new(1));
/// assert_eq!(state.name(), "player_actions");
/// assert_eq!(state.acting_player(), Some(PlayerId::new(1)));
/// assert!(!state.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum TurnState {
    /// Transient state while the board is being built.
    Setup,
    /// The player spends actions.
    PlayerActions {
        player: PlayerId,
        actions_remaining: u32,
    },
    /// The player draws player cards.
    DrawPlayerCards {
        player: PlayerId,
        draws_remaining: u32,
    },
    /// The player draws infection cards.
    DrawInfectionCards {
        player: PlayerId,
        draws_remaining: u32,
    },
    /// Epidemic interrupt. `parent` is the sub-state it interrupted.
    Epidemic { parent: Box<TurnState> },
    /// Lost: the outbreak track ran past its limit.
    DefeatTooManyOutbreaks,
    /// Lost: a disease ran out of cubes.
    DefeatTooManyInfections { disease: String },
    /// Lost: the player deck ran out.
    DefeatPlayerCardsExhausted,
}

impl TurnState {
    /// Start of a turn.
    #[must_use]
    pub fn player_actions(player: PlayerId) -> Self {
        TurnState::PlayerActions {
            player,
            actions_remaining: ACTIONS_PER_TURN,
        }
    }

    /// Start of the player-card draw phase.
    #[must_use]
    pub fn draw_player_cards(player: PlayerId) -> Self {
        TurnState::DrawPlayerCards {
            player,
            draws_remaining: PLAYER_DRAWS_PER_TURN,
        }
    }

    /// Wire name of the sub-state.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TurnState::Setup => "setup",
            TurnState::PlayerActions { .. } => "player_actions",
            TurnState::DrawPlayerCards { .. } => "draw_player_cards",
            TurnState::DrawInfectionCards { .. } => "draw_infection_cards",
            TurnState::Epidemic { .. } => "epidemic",
            TurnState::DefeatTooManyOutbreaks => "defeat_too_many_outbreaks",
            TurnState::DefeatTooManyInfections { .. } => "defeat_too_many_infections",
            TurnState::DefeatPlayerCardsExhausted => "defeat_player_cards_exhausted",
        }
    }

    /// The player allowed to act. An epidemic belongs to the player whose
    /// draw it interrupted.
    #[must_use]
    pub fn acting_player(&self) -> Option<PlayerId> {
        match self {
            TurnState::PlayerActions { player, .. }
            | TurnState::DrawPlayerCards { player, .. }
            | TurnState::DrawInfectionCards { player, .. } => Some(*player),
            TurnState::Epidemic { parent } => parent.acting_player(),
            _ => None,
        }
    }

    /// Check if no transition leads out of this state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TurnState::DefeatTooManyOutbreaks
                | TurnState::DefeatTooManyInfections { .. }
                | TurnState::DefeatPlayerCardsExhausted
        )
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.acting_player() {
            Some(player) => write!(f, "{}({})", self.name(), player),
            None => f.write_str(self.name()),
        }
    }
}

/// The single mutable game state.
///
/// Piles use `im` persistent vectors so the snapshots carried by events
/// clone in O(1). Front of a pile is index 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Situation {
    /// Active sub-state.
    pub state: TurnState,

    /// Players in turn order.
    pub players: Vec<Player>,

    /// Board locations with cube counts.
    pub locations: Vec<Location>,

    /// Diseases with remaining supply.
    pub diseases: Vec<Disease>,

    /// Player draw pile, epidemics included.
    pub player_cards_draw: Vector<PlayerCard>,

    /// Player discard pile.
    pub player_cards_discard: Vector<PlayerCard>,

    /// Infection draw pile.
    pub infection_cards_draw: Vector<InfectionCard>,

    /// Infection discard pile, most recent first.
    pub infection_cards_discard: Vector<InfectionCard>,

    /// Outbreaks so far.
    pub outbreak_count: u32,

    /// Outbreak limit.
    pub max_outbreaks: u32,

    /// Placed research centers.
    pub research_centers: Vec<ResearchCenter>,

    /// Research centers left in the pool.
    pub research_centers_available: u32,

    /// Infection-rate track.
    pub infection_rate_levels: Vec<InfectionRateLevel>,

    /// Position on the infection-rate track.
    pub infection_rate_index: usize,

    /// Where pawns start.
    pub starting_location: String,
}

impl Situation {
    /// Deep copy of a (merged) definition with empty player list and piles
    /// in definition order. Setup fills in the rest.
    #[must_use]
    pub fn from_definition(definition: &GameDefinition) -> Self {
        Self {
            state: TurnState::Setup,
            players: Vec::new(),
            locations: definition.locations.clone(),
            diseases: definition.diseases.clone(),
            player_cards_draw: definition.player_cards_draw.iter().cloned().collect(),
            player_cards_discard: Vector::new(),
            infection_cards_draw: definition.infection_cards_draw.iter().cloned().collect(),
            infection_cards_discard: Vector::new(),
            outbreak_count: definition.outbreak_count,
            max_outbreaks: definition.max_outbreaks,
            research_centers: definition.research_centers.clone(),
            research_centers_available: definition.research_centers_available,
            infection_rate_levels: definition.infection_rate_levels.clone(),
            infection_rate_index: definition.infection_rate_index,
            starting_location: definition.starting_location.clone(),
        }
    }

    // === Lookups ===

    /// Find a location by name.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Find a location by name, mutably.
    pub fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.locations.iter_mut().find(|l| l.name == name)
    }

    /// Find a disease by name.
    #[must_use]
    pub fn disease(&self, name: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.name == name)
    }

    /// Find a disease by name, mutably.
    pub fn disease_mut(&mut self, name: &str) -> Option<&mut Disease> {
        self.diseases.iter_mut().find(|d| d.name == name)
    }

    /// Disease spread by a location's infection cards.
    #[must_use]
    pub fn disease_of(&self, location: &str) -> Option<&Disease> {
        let location = self.location(location)?;
        self.disease(&location.disease)
    }

    /// Find a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Find a player by id, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Player after `id` in turn order, wrapping to the first.
    #[must_use]
    pub fn next_player(&self, id: PlayerId) -> Option<PlayerId> {
        let index = self.players.iter().position(|p| p.id == id)?;
        let next = (index + 1) % self.players.len();
        Some(self.players[next].id)
    }

    // === Queries ===

    /// Infection cards drawn per turn at the current level.
    #[must_use]
    pub fn infection_rate(&self) -> u32 {
        self.infection_rate_levels
            .get(self.infection_rate_index)
            .map_or(0, |level| level.rate)
    }

    /// Cubes of `disease` on `location`. Unknown names count as zero.
    #[must_use]
    pub fn cubes(&self, location: &str, disease: &str) -> u8 {
        self.location(location).map_or(0, |l| l.cubes(disease))
    }

    /// Cubes of `disease` on the whole board.
    #[must_use]
    pub fn cubes_on_board(&self, disease: &str) -> u32 {
        self.locations.iter().map(|l| u32::from(l.cubes(disease))).sum()
    }

    /// Epidemic markers still in the player draw pile.
    #[must_use]
    pub fn epidemics_remaining(&self) -> usize {
        self.player_cards_draw.iter().filter(|c| c.is_epidemic()).count()
    }

    /// Check if a research center stands on `location`.
    #[must_use]
    pub fn has_research_center(&self, location: &str) -> bool {
        self.research_centers.iter().any(|rc| rc.location == location)
    }
}
