//! User-facing notifications

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A toast-style notification for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Title to display (single line)
    pub title: String,
    /// Body text
    pub message: String,
    /// Severity (affects styling)
    pub severity: Severity,
}

impl Notification {
    /// Create a success notification
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Create an error notification
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Sink for notifications. Fire-and-forget.
///
/// Any `Fn(Notification)` closure is a notifier:
///
/// ```
/// use account_grid::notify::{Notification, Notifier};
///
/// let notifier = |n: Notification| println!("{}: {}", n.title, n.message);
/// notifier.notify(Notification::success("Success", "Account(s) updated"));
/// ```
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Notifier that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => log::info!("{}: {}", notification.title, notification.message),
            Severity::Error => log::error!("{}: {}", notification.title, notification.message),
        }
    }
}
