//! Notification sink that writes one line per notification.

use std::io::Write;
use std::sync::Mutex;

use crate::task::ports::{Notification, NotificationSink};

/// Writes notifications as `[level] message` lines.
pub struct ConsoleNotificationSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotificationSink {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Creates a sink writing to `out`.
    #[must_use]
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl std::fmt::Debug for ConsoleNotificationSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleNotificationSink").finish_non_exhaustive()
    }
}

impl NotificationSink for ConsoleNotificationSink {
    fn notify(&self, notification: Notification) {
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!(
                level = %notification.level(),
                "notification dropped: output lock poisoned"
            );
            return;
        };
        if let Err(err) = writeln!(out, "[{}] {}", notification.level(), notification.message()) {
            tracing::warn!(error = %err, "failed to write notification");
        }
    }
}
