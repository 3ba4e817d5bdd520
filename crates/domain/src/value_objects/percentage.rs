//! Percentage value object
//!
//! Represents a validated percentage (0-100), used for relative humidity
//! and cloud cover measurements.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a percentage is out of range or not finite
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid percentage: {0} is out of range (must be 0-100)")]
pub struct InvalidPercentage(f64);

/// A percentage in the range 0-100
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Maximum valid percentage
    pub const MAX: f64 = 100.0;

    /// Create a new validated percentage
    ///
    /// # Errors
    ///
    /// Returns `InvalidPercentage` if the value is not finite or outside 0-100.
    pub fn new(value: f64) -> Result<Self, InvalidPercentage> {
        if value.is_finite() && (0.0..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPercentage(value))
        }
    }

    /// Create a percentage, clamping to the valid range
    ///
    /// Non-finite input clamps to 0.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, Self::MAX))
        } else {
            Self(0.0)
        }
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<f64> for Percentage {
    type Error = InvalidPercentage;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

/// Custom deserialization that validates the range
impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
