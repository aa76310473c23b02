//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, GameDefinition, GameRng, PlayerId, Settings};
use crate::events::GameEvent;
use crate::games::sample;
use crate::rules::Game;

use super::py_core::{to_py_err, PyAction, PyPlayerId};

fn json_err(err: serde_json::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// The sample board as a JSON definition.
#[pyfunction]
pub fn small_world_json() -> PyResult<String> {
    serde_json::to_string(&sample::small_world()).map_err(json_err)
}

/// Python wrapper for a running game.
///
/// Events are buffered in memory until drained.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game<Vec<GameEvent>, GameRng>,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - definition_json: Game definition as JSON
    /// - players: Player ids in turn order
    /// - settings_json: Settings as JSON (defaults to no epidemics)
    /// - seed: RNG seed for deterministic games
    #[new]
    #[pyo3(signature = (definition_json, players, settings_json = None, seed = 42))]
    fn new(
        definition_json: &str,
        players: Vec<u32>,
        settings_json: Option<&str>,
        seed: u64,
    ) -> PyResult<Self> {
        let definition = GameDefinition::from_json(definition_json).map_err(json_err)?;
        let settings = settings_json
            .map(Settings::from_json)
            .transpose()
            .map_err(json_err)?
            .unwrap_or_default();
        let players = players.into_iter().map(PlayerId::new).collect();

        Ok(Self {
            game: Game::new(definition, settings, players, Vec::new(), GameRng::new(seed)),
        })
    }

    /// Build the board. Returns False if the initial infections lost the game.
    fn setup(&mut self) -> PyResult<bool> {
        self.game.setup().map_err(to_py_err)
    }

    /// Apply an action given as JSON. Returns whether it was accepted.
    fn act(&mut self, player: u32, action_json: &str) -> PyResult<bool> {
        let action: Action = serde_json::from_str(action_json).map_err(json_err)?;
        self.game
            .act(PlayerId::new(player), action)
            .map(|outcome| outcome.is_accepted())
            .map_err(to_py_err)
    }

    /// Apply an action object. Returns whether it was accepted.
    fn act_with(&mut self, player: &PyPlayerId, action: &PyAction) -> PyResult<bool> {
        self.game
            .act(player.0, action.0)
            .map(|outcome| outcome.is_accepted())
            .map_err(to_py_err)
    }

    /// Actions the player may take right now.
    fn legal_actions(&self, player: u32) -> Vec<PyAction> {
        self.game
            .legal_actions(PlayerId::new(player))
            .into_iter()
            .map(PyAction)
            .collect()
    }

    /// Active sub-state as JSON, or None before setup.
    fn state_json(&self) -> PyResult<Option<String>> {
        self.game
            .state()
            .map(serde_json::to_string)
            .transpose()
            .map_err(json_err)
    }

    /// Whole situation as JSON, or None before setup.
    fn situation_json(&self) -> PyResult<Option<String>> {
        self.game
            .situation()
            .map(serde_json::to_string)
            .transpose()
            .map_err(json_err)
    }

    /// Take every buffered event as a JSON array.
    fn drain_events_json(&mut self) -> PyResult<String> {
        let events = std::mem::take(self.game.sink_mut());
        serde_json::to_string(&events).map_err(json_err)
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Name of the terminal sub-state, if the game was lost.
    #[getter]
    fn defeat(&self) -> Option<&'static str> {
        self.game
            .state()
            .filter(|state| state.is_terminal())
            .map(|state| state.name())
    }

    fn __repr__(&self) -> String {
        let state = self.game.state().map_or("not set up", |state| state.name());
        format!("Game(players={}, state={state})", self.game.players().len())
    }
}
