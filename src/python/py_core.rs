//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Action, EngineError, PlayerId};

/// Map an engine error onto a Python exception.
///
/// Fatal errors become `RuntimeError`; bad input becomes `ValueError`.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    if err.is_fatal() {
        PyRuntimeError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u32) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u32 {
        self.0.raw()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.raw())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.raw())
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Create an action from its wire name, e.g. `"action_pass"`.
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .map(Self)
            .ok_or_else(|| PyValueError::new_err(format!("unknown action {name}")))
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Sub-state the action needs.
    #[getter]
    fn required_state(&self) -> &'static str {
        self.0.required_state()
    }

    fn __repr__(&self) -> String {
        format!("Action({})", self.0.name())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
