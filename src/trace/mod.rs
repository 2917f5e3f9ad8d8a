/*!
 * Trace Recorder
 * Append-only decision log consumed by the presentation layer
 *
 * The engine produces the complete trace synchronously; a consumer replays
 * it at its own pace. Nothing flows back from the trace into the engine.
 */

mod types;

pub use types::{Payload, TraceEvent};

/// Ordered, immutable record of every processed request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one decision; events are never edited or reordered
    pub fn record(&mut self, payload: Payload) {
        let seq = self.events.len() as u32;
        self.events.push(TraceEvent { seq, payload });
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand the finished log to the report
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
