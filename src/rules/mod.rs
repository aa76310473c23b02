//! Rules: the turn state machine and the infection engine.
//!
//! [`Game`] is the single owner of a running game. It validates every
//! action against the active [`TurnState`](crate::core::TurnState), applies
//! it, and reports what happened through the event sink.
//!
//! - `engine`: `Game`, action legality and the per-action transitions
//! - `setup`: one-shot construction of the starting board
//! - `infection`: cube placement, outbreak chains and epidemics
//! - `session`: split borrow shared by the above while a call runs

mod engine;
mod infection;
mod session;
mod setup;

pub use engine::{DefeatReason, Game};
pub use infection::EPIDEMIC_CUBES;
