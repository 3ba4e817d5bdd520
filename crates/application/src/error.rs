//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Prediction service call failed
    ///
    /// The message is already normalized by the gateway: the server's
    /// `detail` field when available, otherwise a status line or the
    /// transport error text. Displayed verbatim.
    #[error("{0}")]
    Gateway(String),
}

impl ApplicationError {
    /// Whether the error originated from the remote service
    pub const fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway(_))
    }
}
