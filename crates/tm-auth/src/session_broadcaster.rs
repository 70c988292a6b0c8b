use crate::SessionEvent;

use tokio::sync::broadcast;

const SESSION_EVENT_CAPACITY: usize = 16;

/// Fan-out of session changes to any number of listeners
#[derive(Clone)]
pub struct SessionBroadcaster {
    events_tx: broadcast::Sender<SessionEvent>,
}

impl SessionBroadcaster {
    pub fn new() -> Self {
        let (events_tx, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self { events_tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    /// Publish an event; having no listeners is fine
    pub fn publish(&self, event: SessionEvent) {
        let _ = self.events_tx.send(event);
    }
}

impl Default for SessionBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
