//! Small two-disease board.
//!
//! Twelve cities, six per disease, two event cards, five roles. Big enough
//! for outbreak chains and a few epidemics, small enough that a game ends
//! in a handful of turns. Setup infects only three cities so the infection
//! pile outlasts the player deck even without epidemics.

use super::BoardBuilder;
use crate::core::GameDefinition;

const BLUE: [&str; 6] = ["Atlanta", "Chicago", "Montreal", "New York", "Washington", "Madrid"];
const YELLOW: [&str; 6] = ["Miami", "Bogota", "Lima", "Mexico City", "Los Angeles", "Sao Paulo"];

const ROUTES: [(&str, &str); 19] = [
    ("Atlanta", "Chicago"),
    ("Atlanta", "Washington"),
    ("Atlanta", "Miami"),
    ("Chicago", "Montreal"),
    ("Chicago", "Los Angeles"),
    ("Chicago", "Mexico City"),
    ("Montreal", "New York"),
    ("Montreal", "Washington"),
    ("New York", "Washington"),
    ("New York", "Madrid"),
    ("Washington", "Miami"),
    ("Madrid", "Sao Paulo"),
    ("Miami", "Bogota"),
    ("Miami", "Mexico City"),
    ("Bogota", "Lima"),
    ("Bogota", "Mexico City"),
    ("Bogota", "Sao Paulo"),
    ("Lima", "Mexico City"),
    ("Mexico City", "Los Angeles"),
];

/// The sample definition. Starts in Atlanta.
///
/// # Panics
///
/// Never in practice: every route joins two cities declared above, which
/// is the only way [`BoardBuilder::build`] can fail. `test_small_world_is_valid`
/// builds it on every run.
#[must_use]
pub fn small_world() -> GameDefinition {
    let mut builder = BoardBuilder::new().disease("blue", 24).disease("yellow", 24);

    for city in BLUE {
        builder = builder.city(city, "blue");
    }
    for city in YELLOW {
        builder = builder.city(city, "yellow");
    }
    for (a, b) in ROUTES {
        builder = builder.connect(a, b);
    }

    let builder = ["Medic", "Scientist", "Researcher", "Dispatcher", "Quarantine Specialist"]
        .into_iter()
        .fold(builder, BoardBuilder::role);

    // Every name above is a city, so this can't fail
    builder
        .event_card("Airlift")
        .event_card("Forecast")
        .start_at("Atlanta")
        .initial_infections(vec![3, 2, 1])
        .build()
        .unwrap_or_else(|err| unreachable!("sample board is malformed: {err}"))
}
