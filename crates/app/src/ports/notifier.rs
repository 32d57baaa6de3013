//! Notifier port — transient, auto-dismissing notifications.

use std::time::Duration;

/// How a notification should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Outcome of a user action.
    Info,
    /// Something is missing but nothing failed (e.g. sensor offline).
    Warning,
    /// A request could not be completed.
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// Styling hint.
    pub severity: Severity,
    /// How long the toast stays visible before dismissing itself.
    pub ttl: Duration,
}

/// Shows notifications to the user.
pub trait Notifier {
    /// Display `notification`. Must not block until it is dismissed.
    fn notify(&self, notification: Notification);
}
