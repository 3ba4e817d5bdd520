//! Simulation request and response types
//!
//! A simulation asks the service to generate a batch of station-style
//! weather scenarios for a season and classify each one. Samples keep the
//! service's insertion order; the index is the stable identity used for
//! selection in the results viewer.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::features::StationFeatures;
use crate::outcome::PredictionOutcome;
use crate::season::Season;

/// Request for a batch of simulated weather scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Number of scenarios to generate (1-50)
    pub samples: u8,
    /// Season to draw the scenarios from
    pub season: Season,
}

impl SimulationRequest {
    /// Minimum accepted sample count
    pub const MIN_SAMPLES: u8 = 1;
    /// Maximum accepted sample count
    pub const MAX_SAMPLES: u8 = 50;

    /// Validate the sample count
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSampleCount` if `samples` is outside 1-50.
    pub const fn validate(&self) -> Result<(), DomainError> {
        if self.samples >= Self::MIN_SAMPLES && self.samples <= Self::MAX_SAMPLES {
            Ok(())
        } else {
            Err(DomainError::InvalidSampleCount(self.samples))
        }
    }
}

/// One simulated scenario: generated features plus their classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedSample {
    /// The generated feature values
    #[serde(flatten)]
    pub features: StationFeatures,
    /// The classification of those features
    #[serde(flatten)]
    pub outcome: PredictionOutcome,
}

/// A batch of simulated scenarios, in service insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationBatch {
    /// The generated scenarios
    pub simulations: Vec<SimulatedSample>,
}

impl SimulationBatch {
    /// Number of scenarios in the batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.simulations.len()
    }

    /// Whether the batch is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simulations.is_empty()
    }

    /// Get the scenario at `index`, if present
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SimulatedSample> {
        self.simulations.get(index)
    }
}
