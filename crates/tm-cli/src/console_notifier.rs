use tm_sync::{LogNotifier, Notification, Notifier};

/// Prints notifications to stderr next to the JSON on stdout, and logs them
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    log: LogNotifier,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = if notification.is_destructive() { "!" } else { "*" };
        eprintln!(
            "{} {}: {}",
            marker, notification.title, notification.description
        );
        self.log.notify(notification);
    }
}
