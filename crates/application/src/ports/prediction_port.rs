//! Prediction service port
//!
//! Defines the interface to the remote prediction/simulation service.
//! Implementations normalize transport and application failures into a
//! single `ApplicationError::Gateway` with a human-readable message.

use async_trait::async_trait;
use domain::{PredictionOutcome, SimulationBatch, SimulationRequest, WeatherFeatures};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for prediction service operations
///
/// Callers are responsible for range-validating inputs before invocation;
/// the port does not re-validate. No retry or de-duplication is performed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PredictionPort: Send + Sync {
    /// Classify a single feature vector
    async fn predict(
        &self,
        features: &WeatherFeatures,
    ) -> Result<PredictionOutcome, ApplicationError>;

    /// Generate and classify a batch of simulated scenarios
    async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationBatch, ApplicationError>;
}
