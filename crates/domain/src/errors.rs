//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A feature field failed range or finiteness validation
    #[error("{message}")]
    InvalidFeature {
        /// Wire name of the offending field
        field: &'static str,
        /// Human-readable description of the violation
        message: String,
    },

    /// Season string not recognized
    #[error("Invalid season: {0}")]
    InvalidSeason(String),

    /// Simulation sample count outside the accepted range
    #[error("Number of samples must be between 1 and 50")]
    InvalidSampleCount(u8),
}

impl DomainError {
    /// Create an invalid-feature error
    pub fn invalid_feature(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFeature {
            field,
            message: message.into(),
        }
    }
}
