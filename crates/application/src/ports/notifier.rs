//! Notifier port
//!
//! Surfaces validation and gateway failures (and simulation completions) to
//! the user. Fire and forget; no return value is consumed.

#[cfg(test)]
use mockall::automock;

/// How prominently a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine information
    Info,
    /// Something went wrong
    Destructive,
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// One-line description
    pub description: String,
    /// Presentation severity
    pub severity: Severity,
}

impl Notification {
    /// Create an informational notification
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// Create an error notification
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Port for delivering notifications to the user
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    /// Deliver a notification
    fn notify(&self, notification: &Notification);
}
