//! Wind direction value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a wind direction is out of range or not finite
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid wind direction: {0} is out of range (must be 0-360 degrees)")]
pub struct InvalidWindDirection(f64);

/// Wind direction in degrees (0-360, 0 = north)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct WindDirection(f64);

impl WindDirection {
    /// Maximum valid direction in degrees
    pub const MAX: f64 = 360.0;

    /// Create a new validated wind direction
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindDirection` if the value is not finite or
    /// outside 0-360.
    pub fn new(degrees: f64) -> Result<Self, InvalidWindDirection> {
        if degrees.is_finite() && (0.0..=Self::MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(InvalidWindDirection(degrees))
        }
    }

    /// Get the direction in degrees
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Compass point abbreviation for the direction
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compass_point(self) -> &'static str {
        const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        let sector = ((self.0 + 22.5) / 45.0) as usize % 8;
        POINTS[sector]
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}", self.0, self.compass_point())
    }
}

impl TryFrom<f64> for WindDirection {
    type Error = InvalidWindDirection;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Custom deserialization that validates the range
impl<'de> Deserialize<'de> for WindDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
