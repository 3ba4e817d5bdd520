//! Wall-clock value objects
//!
//! Hour-of-day and day-of-week fields used by the station-style feature
//! vector. Both default to the current local time.

use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when an hour is outside 0-23
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid hour: {0} is out of range (must be 0-23)")]
pub struct InvalidClockHour(u8);

/// Hour of day (0-23)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClockHour(u8);

impl ClockHour {
    /// Maximum valid hour
    pub const MAX: u8 = 23;

    /// Create a new validated hour
    ///
    /// # Errors
    ///
    /// Returns `InvalidClockHour` if the value is greater than 23.
    pub const fn new(hour: u8) -> Result<Self, InvalidClockHour> {
        if hour > Self::MAX {
            Err(InvalidClockHour(hour))
        } else {
            Ok(Self(hour))
        }
    }

    /// The current hour in local time
    #[must_use]
    pub fn now_local() -> Self {
        // Timelike::hour is always 0-23
        Self(Local::now().hour() as u8)
    }

    /// Get the hour as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ClockHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl<'de> Deserialize<'de> for ClockHour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Error returned when a day of week is outside 0-6
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid day of week: {0} is out of range (must be 0-6)")]
pub struct InvalidDayOfWeek(u8);

/// Day of week (0 = Monday, 6 = Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    /// Maximum valid day index
    pub const MAX: u8 = 6;

    /// Create a new validated day of week
    ///
    /// # Errors
    ///
    /// Returns `InvalidDayOfWeek` if the value is greater than 6.
    pub const fn new(day: u8) -> Result<Self, InvalidDayOfWeek> {
        if day > Self::MAX {
            Err(InvalidDayOfWeek(day))
        } else {
            Ok(Self(day))
        }
    }

    /// Today's day of week in local time
    #[must_use]
    pub fn today_local() -> Self {
        // num_days_from_monday is always 0-6
        Self(Local::now().weekday().num_days_from_monday() as u8)
    }

    /// Get the day index as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// English day name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "Monday",
            1 => "Tuesday",
            2 => "Wednesday",
            3 => "Thursday",
            4 => "Friday",
            5 => "Saturday",
            _ => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
