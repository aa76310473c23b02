//! Locations and diseases.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Most cubes of one disease a location can hold. Another cube causes an
/// outbreak instead.
pub const MAX_CUBES: u8 = 3;

/// A location on the board.
///
/// ## Example
///
/// ```
/// use outbreak_engine::board::Location;
///
/// let mut atlanta = Location::new("Atlanta", "blue").with_adjacent("Chicago");
/// assert_eq!(atlanta.cubes("blue"), 0);
///
/// atlanta.add_cube("blue");
/// assert_eq!(atlanta.cubes("blue"), 1);
/// assert!(!atlanta.is_saturated("blue"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique location name.
    pub name: String,

    /// Disease this location's infection cards spread.
    pub disease: String,

    /// Names of neighbouring locations.
    pub adjacent: SmallVec<[String; 6]>,

    /// Cubes per disease name. Missing entries mean zero.
    #[serde(default)]
    pub infections: FxHashMap<String, u8>,
}

impl Location {
    /// Create a location with no neighbours and no cubes.
    #[must_use]
    pub fn new(name: impl Into<String>, disease: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disease: disease.into(),
            adjacent: SmallVec::new(),
            infections: FxHashMap::default(),
        }
    }

    /// Add a neighbour (builder pattern).
    #[must_use]
    pub fn with_adjacent(mut self, name: impl Into<String>) -> Self {
        self.adjacent.push(name.into());
        self
    }

    /// Cubes of `disease` on this location.
    #[must_use]
    pub fn cubes(&self, disease: &str) -> u8 {
        self.infections.get(disease).copied().unwrap_or(0)
    }

    /// Check if another cube of `disease` would cause an outbreak.
    #[must_use]
    pub fn is_saturated(&self, disease: &str) -> bool {
        self.cubes(disease) >= MAX_CUBES
    }

    /// Place one cube. Callers check saturation first.
    pub fn add_cube(&mut self, disease: &str) {
        let count = self.infections.entry(disease.to_string()).or_insert(0);
        debug_assert!(*count < MAX_CUBES, "cube placed on saturated location");
        *count += 1;
    }

    /// Total cubes of every disease.
    #[must_use]
    pub fn total_cubes(&self) -> u32 {
        self.infections.values().map(|&c| u32::from(c)).sum()
    }

    /// Check if `name` is a neighbour.
    #[must_use]
    pub fn is_adjacent(&self, name: &str) -> bool {
        self.adjacent.iter().any(|a| a == name)
    }
}

/// A disease and its remaining cube supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    /// Unique disease name.
    pub name: String,

    /// Cubes left in the supply.
    pub cubes: u32,
}

impl Disease {
    /// Create a disease with a full supply.
    #[must_use]
    pub fn new(name: impl Into<String>, cubes: u32) -> Self {
        Self {
            name: name.into(),
            cubes,
        }
    }

    /// Take one cube from the supply. Returns false if the supply is empty.
    pub fn take_cube(&mut self) -> bool {
        match self.cubes.checked_sub(1) {
            Some(left) => {
                self.cubes = left;
                true
            }
            None => false,
        }
    }
}

/// A research center placed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchCenter {
    /// Location the center stands on.
    pub location: String,
}

/// One step of the infection-rate track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionRateLevel {
    /// Infection cards drawn at the end of each turn at this level.
    pub rate: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_cubes() {
        let mut loc = Location::new("Paris", "blue");

        for expected in 1..=MAX_CUBES {
            loc.add_cube("blue");
            assert_eq!(loc.cubes("blue"), expected);
        }
        assert!(loc.is_saturated("blue"));
        assert!(!loc.is_saturated("red"));
        assert_eq!(loc.total_cubes(), 3);
    }

    #[test]
    fn test_location_adjacency() {
        let loc = Location::new("Paris", "blue")
            .with_adjacent("London")
            .with_adjacent("Madrid");

        assert!(loc.is_adjacent("London"));
        assert!(!loc.is_adjacent("Tokyo"));
        assert_eq!(loc.adjacent.len(), 2);
    }

    #[test]
    fn test_location_json_without_infections() {
        let json = r#"{"name":"Lima","disease":"yellow","adjacent":["Bogota"]}"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.cubes("yellow"), 0);
        assert!(loc.is_adjacent("Bogota"));
    }

    #[test]
    fn test_disease_supply() {
        let mut d = Disease::new("red", 2);
        assert!(d.take_cube());
        assert!(d.take_cube());
        assert!(!d.take_cube());
        assert_eq!(d.cubes, 0);
    }
}
