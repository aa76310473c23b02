//! Builder for game definitions.

use std::collections::BTreeMap;

use crate::board::{Disease, InfectionRateLevel, Location, ResearchCenter};
use crate::cards::{InfectionCard, PlayerCard};
use crate::core::{DefinitionError, GameDefinition, Role};

/// Assembles a [`GameDefinition`] from a compact board description.
///
/// Every city gets one location card in the player deck and one infection
/// card. Connections are undirected.
///
/// ## Example
///
/// ```
/// use outbreak_engine::games::BoardBuilder;
///
/// let definition = BoardBuilder::new()
///     .disease("blue", 24)
///     .city("Atlanta", "blue")
///     .city("Chicago", "blue")
///     .connect("Atlanta", "Chicago")
///     .initial_infections(vec![1])
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.starting_location, "Atlanta");
/// assert_eq!(definition.infection_cards_draw.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    diseases: Vec<Disease>,
    cities: Vec<Location>,
    connections: Vec<(String, String)>,
    roles: Vec<Role>,
    event_cards: Vec<String>,
    starting_location: Option<String>,
    initial_infections: Vec<u32>,
    hand_sizes: BTreeMap<usize, usize>,
    infection_rates: Vec<u32>,
    max_outbreaks: u32,
    research_centers: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            diseases: Vec::new(),
            cities: Vec::new(),
            connections: Vec::new(),
            roles: Vec::new(),
            event_cards: Vec::new(),
            starting_location: None,
            initial_infections: vec![3, 3, 3, 2, 2, 2, 1, 1, 1],
            hand_sizes: BTreeMap::from([(2, 4), (3, 3), (4, 2)]),
            infection_rates: vec![2, 2, 2, 3, 3, 4, 4],
            max_outbreaks: 7,
            research_centers: 6,
        }
    }
}

impl BoardBuilder {
    /// Empty board with the classic rule tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a disease with `cubes` in its supply.
    #[must_use]
    pub fn disease(mut self, name: &str, cubes: u32) -> Self {
        self.diseases.push(Disease::new(name, cubes));
        self
    }

    /// Add a city. The first city added is the default start.
    #[must_use]
    pub fn city(mut self, name: &str, disease: &str) -> Self {
        self.cities.push(Location::new(name, disease));
        self
    }

    /// Join two cities. Order doesn't matter and repeats are ignored.
    #[must_use]
    pub fn connect(mut self, a: &str, b: &str) -> Self {
        self.connections.push((a.to_string(), b.to_string()));
        self
    }

    #[must_use]
    pub fn role(mut self, name: &str) -> Self {
        self.roles.push(Role::new(name));
        self
    }

    /// Add an event card to the player deck.
    #[must_use]
    pub fn event_card(mut self, name: &str) -> Self {
        self.event_cards.push(name.to_string());
        self
    }

    /// Override the starting city.
    #[must_use]
    pub fn start_at(mut self, name: &str) -> Self {
        self.starting_location = Some(name.to_string());
        self
    }

    /// Cube counts for the setup infection draws, in draw order.
    #[must_use]
    pub fn initial_infections(mut self, cubes: Vec<u32>) -> Self {
        self.initial_infections = cubes;
        self
    }

    /// Opening hand size for a player count.
    #[must_use]
    pub fn hand_size(mut self, players: usize, cards: usize) -> Self {
        self.hand_sizes.insert(players, cards);
        self
    }

    /// Replace the infection-rate track.
    #[must_use]
    pub fn infection_rates(mut self, rates: &[u32]) -> Self {
        self.infection_rates = rates.to_vec();
        self
    }

    /// Outbreaks the board can take; one more loses.
    #[must_use]
    pub fn max_outbreaks(mut self, max: u32) -> Self {
        self.max_outbreaks = max;
        self
    }

    /// Size of the research-center pool.
    #[must_use]
    pub fn research_centers(mut self, pool: u32) -> Self {
        self.research_centers = pool;
        self
    }

    /// Build the definition.
    ///
    /// Fails if a connection names a city that was never added. Everything
    /// else is checked by [`GameDefinition::validate`] once the players are
    /// known.
    pub fn build(self) -> Result<GameDefinition, DefinitionError> {
        let mut locations = self.cities;

        for (a, b) in &self.connections {
            for (from, to) in [(a, b), (b, a)] {
                if !locations.iter().any(|l| &l.name == to) {
                    return Err(DefinitionError::UnknownNeighbour {
                        location: from.clone(),
                        neighbour: to.clone(),
                    });
                }
                let location = locations
                    .iter_mut()
                    .find(|l| &l.name == from)
                    .ok_or_else(|| DefinitionError::UnknownNeighbour {
                        location: to.clone(),
                        neighbour: from.clone(),
                    })?;
                if !location.is_adjacent(to) {
                    location.adjacent.push(to.clone());
                }
            }
        }

        let starting_location = self
            .starting_location
            .or_else(|| locations.first().map(|l| l.name.clone()))
            .unwrap_or_default();

        let player_cards_draw = locations
            .iter()
            .map(|l| PlayerCard::location_card(l.name.as_str()))
            .chain(self.event_cards.iter().map(|name| PlayerCard::event(name.as_str())))
            .collect();
        let infection_cards_draw = locations
            .iter()
            .map(|l| InfectionCard::new(l.name.as_str()))
            .collect();

        Ok(GameDefinition {
            locations,
            diseases: self.diseases,
            roles: self.roles,
            player_cards_draw,
            infection_cards_draw,
            starting_location,
            initial_infections: self.initial_infections,
            initial_player_cards: self.hand_sizes,
            infection_rate_levels: self
                .infection_rates
                .into_iter()
                .map(|rate| InfectionRateLevel { rate })
                .collect(),
            infection_rate_index: 0,
            max_outbreaks: self.max_outbreaks,
            outbreak_count: 0,
            research_centers: Vec::<ResearchCenter>::new(),
            research_centers_available: self.research_centers,
        })
    }
}
