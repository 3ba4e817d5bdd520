//! Ports to external collaborators

mod notifier;
mod prediction_port;

pub use notifier::{Notification, Notifier, Severity};
pub use prediction_port::PredictionPort;

#[cfg(test)]
pub use notifier::MockNotifier;
#[cfg(test)]
pub use prediction_port::MockPredictionPort;
