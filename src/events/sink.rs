//! Event sink capability and reference sinks.

use std::sync::mpsc::Sender;

use super::GameEvent;

/// Receiver of the engine's event stream.
///
/// The engine calls `emit` synchronously, in order, and ignores whatever
/// the sink does with the event.
pub trait EventSink {
    /// Accept one event.
    fn emit(&mut self, event: GameEvent);
}

/// In-memory log.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Channel sink. A dropped receiver is not the engine's problem; the event
/// is discarded.
impl EventSink for Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        if let Err(err) = self.send(event) {
            tracing::warn!(event_type = err.0.event_type(), "event receiver disconnected");
        }
    }
}

/// Sink wrapping a closure.
///
/// ```
/// use outbreak_engine::events::{EventSink, FnSink, GameEvent};
///
/// let mut outbreaks = 0;
/// let mut sink = FnSink(|event: GameEvent| {
///     if event.event_type() == "outbreak" {
///         outbreaks += 1;
///     }
/// });
/// sink.emit(GameEvent::Outbreak { location: "Paris".into(), disease: "blue".into() });
/// drop(sink);
/// assert_eq!(outbreaks, 1);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(GameEvent)> EventSink for FnSink<F> {
    fn emit(&mut self, event: GameEvent) {
        (self.0)(event);
    }
}

impl<F> std::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnSink")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn outbreak() -> GameEvent {
        GameEvent::Outbreak {
            location: "Paris".into(),
            disease: "blue".into(),
        }
    }

    #[test]
    fn test_vec_sink() {
        let mut log = Vec::new();
        log.emit(outbreak());
        assert_eq!(log, vec![outbreak()]);
    }

    #[test]
    fn test_borrowed_sink() {
        let mut log: Vec<GameEvent> = Vec::new();
        {
            let mut borrowed = &mut log;
            borrowed.emit(outbreak());
        }
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_channel_sink() {
        let (mut tx, rx) = mpsc::channel();
        tx.emit(outbreak());
        assert_eq!(rx.recv().unwrap(), outbreak());

        drop(rx);
        // Disconnected receivers are ignored
        tx.emit(outbreak());
    }
}
