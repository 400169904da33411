use std::time::Duration;

/// How long a snackbar stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// A transient text message (snackbar), shown at the bottom-end corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    /// A message shown for [`NOTIFICATION_DURATION`].
    pub fn timed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: NOTIFICATION_DURATION,
        }
    }
}

/// Surface that displays notifications to the user.
pub trait Notifier: Send + Sync {
    fn open(&self, notification: Notification);
}
