//! Python bindings for the outbreak engine.
//!
//! Thin JSON-in, JSON-out wrapper so a Python host can drive a game without
//! mirroring every type.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import outbreak_engine as oe
//!
//! game = oe.Game(definition_json, players=[1, 2], settings_json='{"number_of_epidemics": 4}', seed=42)
//! game.setup()
//! game.act(1, json.dumps({"name": "action_pass"}))
//!
//! for event in json.loads(game.drain_events_json()):
//!     print(event["event_type"])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// outbreak_engine: rules engine for a cooperative outbreak board game.
#[pymodule]
fn outbreak_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyGame>()?;
    m.add_function(wrap_pyfunction!(small_world_json, m)?)?;
    Ok(())
}
