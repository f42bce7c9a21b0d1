//! The notification service.
//!
//! An explicit, injected service rather than a process-wide singleton:
//! whoever mounts a view constructs the channel, hands the [`Notifier`]
//! half to dispatchers, and drains the [`NotificationFeed`] half into
//! whatever toast surface the shell renders. Tests capture the feed
//! directly.

use tokio::sync::mpsc;
use tracing::{info, warn};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The action completed
    Success,
    /// The action failed; the message is the error shown to the user
    Error,
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Presentation severity
    pub severity: Severity,
    /// Message shown verbatim
    pub message: String,
}

/// The sending half handed to dispatchers.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

/// The receiving half owned by the host shell.
#[derive(Debug)]
pub struct NotificationFeed {
    rx: mpsc::UnboundedReceiver<Notification>,
}

/// Builds a connected notifier/feed pair.
#[must_use]
pub fn channel() -> (Notifier, NotificationFeed) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NotificationFeed { rx })
}

impl Notifier {
    /// Emits a success notification.
    pub fn success(&self, message: impl Into<String>) {
        self.emit(Severity::Success, message.into());
    }

    /// Emits an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into());
    }

    fn emit(&self, severity: Severity, message: String) {
        info!(?severity, %message, "notification");
        if self
            .tx
            .send(Notification { severity, message })
            .is_err()
        {
            // The shell dropped its feed (e.g. mid-navigation); nothing to do
            warn!("notification feed closed; message dropped");
        }
    }
}

impl NotificationFeed {
    /// Pops the next notification if one is already queued.
    pub fn try_next(&mut self) -> Option<Notification> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next notification; `None` when every notifier is gone.
    pub async fn next(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }
}
