//! Event log.
//!
//! Every accepted mutation emits one or more [`GameEvent`]s to an injected
//! [`EventSink`]. Events are append-only and never retracted; replaying a
//! game's events in order reproduces everything that happened.
//!
//! ## Example
//!
//! ```
//! use outbreak_engine::events::{EventSink, GameEvent};
//!
//! let mut log: Vec<GameEvent> = Vec::new();
//! log.emit(GameEvent::Outbreak { location: "Paris".into(), disease: "blue".into() });
//! assert_eq!(log[0].event_type(), "outbreak");
//! ```

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventSink, FnSink};
