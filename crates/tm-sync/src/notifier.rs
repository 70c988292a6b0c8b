use crate::Notification;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{info, warn};

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            warn!("{}: {}", notification.title, notification.description);
        } else {
            info!("{}: {}", notification.title, notification.description);
        }
    }
}

/// Keeps every notification; cloned handles share the list
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.lock().iter().map(|n| n.title.clone()).collect()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}
