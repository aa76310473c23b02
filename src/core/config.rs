//! Game configuration: the static definition and the settings overlay.
//!
//! Hosts provide:
//! - `GameDefinition`: the board, decks and rule tables
//! - `Settings`: per-session choices layered on top (epidemic count, ...)
//!
//! Both load from JSON. The engine merges them once at setup and never
//! touches the originals again.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::DefinitionError;
use super::player::PlayerId;
use crate::board::{Disease, InfectionRateLevel, Location, ResearchCenter};
use crate::cards::{InfectionCard, PlayerCard};

/// A role a player can be dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name.
    pub name: String,
}

impl Role {
    /// Create a role.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Static game definition.
///
/// Immutable once handed to the engine. Optional fields default to an
/// untouched board: no outbreaks yet, infection rate at the first level, no
/// research centers placed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameDefinition {
    /// Board locations with adjacency.
    pub locations: Vec<Location>,

    /// Diseases with their full cube supply.
    pub diseases: Vec<Disease>,

    /// Role pool.
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Player cards before shuffling (no epidemics).
    pub player_cards_draw: Vec<PlayerCard>,

    /// Infection cards before shuffling.
    pub infection_cards_draw: Vec<InfectionCard>,

    /// Where every pawn and the first research center start.
    pub starting_location: String,

    /// Cubes placed by each initial infection card, in draw order.
    pub initial_infections: Vec<u32>,

    /// Initial hand size keyed by player count.
    pub initial_player_cards: BTreeMap<usize, usize>,

    /// Infection-rate track.
    pub infection_rate_levels: Vec<InfectionRateLevel>,

    /// Starting position on the infection-rate track.
    #[serde(default)]
    pub infection_rate_index: usize,

    /// Outbreaks the players survive; one more loses.
    pub max_outbreaks: u32,

    /// Outbreaks already counted.
    #[serde(default)]
    pub outbreak_count: u32,

    /// Research centers already on the board.
    #[serde(default)]
    pub research_centers: Vec<ResearchCenter>,

    /// Research centers left in the pool.
    pub research_centers_available: u32,
}

impl GameDefinition {
    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Copy of this definition with the settings' overrides applied.
    #[must_use]
    pub fn merged(&self, settings: &Settings) -> Self {
        let mut merged = self.clone();
        if let Some(max) = settings.max_outbreaks {
            merged.max_outbreaks = max;
        }
        if let Some(pool) = settings.research_centers_available {
            merged.research_centers_available = pool;
        }
        if let Some(levels) = &settings.infection_rate_levels {
            merged.infection_rate_levels = levels.clone();
        }
        merged
    }

    /// Initial hand size for a player count.
    #[must_use]
    pub fn hand_size(&self, player_count: usize) -> Option<usize> {
        self.initial_player_cards.get(&player_count).copied()
    }

    /// Find a location by name.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Check that the definition can run a game for these players.
    pub fn validate(&self, players: &[PlayerId]) -> Result<(), DefinitionError> {
        if players.is_empty() {
            return Err(DefinitionError::NoPlayers);
        }
        let mut seen = FxHashSet::default();
        for player in players {
            if !seen.insert(*player) {
                return Err(DefinitionError::DuplicatePlayer(player.raw()));
            }
        }

        let diseases: FxHashSet<&str> = self.diseases.iter().map(|d| d.name.as_str()).collect();
        let locations: FxHashSet<&str> = self.locations.iter().map(|l| l.name.as_str()).collect();

        for location in &self.locations {
            if !diseases.contains(location.disease.as_str()) {
                return Err(DefinitionError::UnknownLocationDisease {
                    location: location.name.clone(),
                    disease: location.disease.clone(),
                });
            }
            if let Some(missing) = location
                .adjacent
                .iter()
                .find(|n| !locations.contains(n.as_str()))
            {
                return Err(DefinitionError::UnknownNeighbour {
                    location: location.name.clone(),
                    neighbour: missing.clone(),
                });
            }
        }

        if !locations.contains(self.starting_location.as_str()) {
            return Err(DefinitionError::UnknownStartingLocation(
                self.starting_location.clone(),
            ));
        }

        if let Some(card) = self
            .infection_cards_draw
            .iter()
            .find(|c| !locations.contains(c.location.as_str()))
        {
            return Err(DefinitionError::UnknownInfectionLocation(card.location.clone()));
        }

        if self.infection_rate_index >= self.infection_rate_levels.len() {
            return Err(DefinitionError::BadInfectionRate {
                index: self.infection_rate_index,
            });
        }

        let hand_size = self
            .hand_size(players.len())
            .ok_or(DefinitionError::MissingHandSize(players.len()))?;

        let start_has_center = self
            .research_centers
            .iter()
            .any(|c| c.location == self.starting_location);
        if self.research_centers_available == 0 && !start_has_center {
            return Err(DefinitionError::NoResearchCenters);
        }

        let needed = hand_size * players.len();
        if needed > self.player_cards_draw.len() {
            return Err(DefinitionError::NotEnoughPlayerCards {
                needed,
                available: self.player_cards_draw.len(),
            });
        }

        Ok(())
    }
}

/// Per-session settings layered over the definition.
///
/// ## Example
///
/// ```
/// use outbreak_engine::core::Settings;
///
/// let settings = Settings::from_json(r#"{"number_of_epidemics": 5}"#).unwrap();
/// assert_eq!(settings.number_of_epidemics, 5);
/// assert_eq!(settings.max_outbreaks, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Epidemic cards spliced into the player deck.
    pub number_of_epidemics: usize,

    /// Override for the outbreak limit.
    #[serde(default)]
    pub max_outbreaks: Option<u32>,

    /// Override for the research center pool.
    #[serde(default)]
    pub research_centers_available: Option<u32>,

    /// Override for the infection-rate track.
    #[serde(default)]
    pub infection_rate_levels: Option<Vec<InfectionRateLevel>>,
}

impl Settings {
    /// Settings with only an epidemic count.
    #[must_use]
    pub fn with_epidemics(number_of_epidemics: usize) -> Self {
        Self {
            number_of_epidemics,
            ..Self::default()
        }
    }

    /// Parse settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
