//! Terminal notifier
//!
//! Delivers notifications as severity-tagged lines on stderr so they never
//! interleave with rendered output on stdout.

#![allow(clippy::print_stderr)]

use application::{Notification, Notifier, Severity};

/// Notifier that writes to stderr
#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, notification: &Notification) {
        let tag = match notification.severity {
            Severity::Info => "✅",
            Severity::Destructive => "❌",
        };
        eprintln!("{tag} {}: {}", notification.title, notification.description);
    }
}
