//! Event sink that captures everything it receives.

use bluestar_protocol::{EventMsg, EventPayload, EventSink};
use parking_lot::Mutex;

/// Sink collecting events for later assertions.
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<EventMsg>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads of all captured events, in emission order.
    pub fn payloads(&self) -> Vec<EventPayload> {
        self.events
            .lock()
            .iter()
            .map(|event| event.payload.clone())
            .collect()
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, event: EventMsg) {
        self.events.lock().push(event);
    }
}
