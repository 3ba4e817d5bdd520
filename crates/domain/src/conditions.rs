//! Weather condition code lookup
//!
//! The prediction service classifies into a fixed set of 23 integer codes.
//! Anything outside that set degrades to `Unknown` rather than failing.

use crate::outcome::PredictionValue;

/// Weather condition derived from the service's classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Code 0
    Cloudy,
    /// Code 1
    Rainy,
    /// Code 2
    Snowy,
    /// Code 3
    Thunderstorm,
    /// Code 4
    Foggy,
    /// Code 5
    Drizzle,
    /// Code 6
    Overcast,
    /// Code 7
    Windy,
    /// Code 8
    PartlyCloudy,
    /// Code 9
    Sunny,
    /// Code 10
    Hot,
    /// Code 11
    Cold,
    /// Code 12
    Humid,
    /// Code 13
    Dry,
    /// Code 14
    Stormy,
    /// Code 15
    Dusty,
    /// Code 16
    Freezing,
    /// Code 17
    Mild,
    /// Code 18
    Windstorm,
    /// Code 19
    Blizzard,
    /// Code 20
    HeavyRain,
    /// Code 21
    LightRain,
    /// Code 22
    Hurricane,
    /// Any code outside 0-22
    Unknown,
}

impl Condition {
    /// Number of enumerated condition codes
    pub const CODE_COUNT: usize = 23;

    /// Map a classification code to a condition
    #[must_use]
    pub const fn from_code(code: usize) -> Self {
        match code {
            0 => Self::Cloudy,
            1 => Self::Rainy,
            2 => Self::Snowy,
            3 => Self::Thunderstorm,
            4 => Self::Foggy,
            5 => Self::Drizzle,
            6 => Self::Overcast,
            7 => Self::Windy,
            8 => Self::PartlyCloudy,
            9 => Self::Sunny,
            10 => Self::Hot,
            11 => Self::Cold,
            12 => Self::Humid,
            13 => Self::Dry,
            14 => Self::Stormy,
            15 => Self::Dusty,
            16 => Self::Freezing,
            17 => Self::Mild,
            18 => Self::Windstorm,
            19 => Self::Blizzard,
            20 => Self::HeavyRain,
            21 => Self::LightRain,
            22 => Self::Hurricane,
            _ => Self::Unknown,
        }
    }

    /// Map a prediction value to a condition
    ///
    /// The value is coerced to a number first; numeric strings are accepted.
    /// Non-numeric, negative, fractional, or out-of-set values map to
    /// `Unknown`.
    #[must_use]
    pub fn from_prediction(value: &PredictionValue) -> Self {
        match value.as_code() {
            Some(code) => Self::from_code(code),
            None => Self::Unknown,
        }
    }

    /// Human-readable label for the condition
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
            Self::Thunderstorm => "Thunderstorm",
            Self::Foggy => "Foggy",
            Self::Drizzle => "Drizzle",
            Self::Overcast => "Overcast",
            Self::Windy => "Windy",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Sunny => "Sunny",
            Self::Hot => "Hot",
            Self::Cold => "Cold",
            Self::Humid => "Humid",
            Self::Dry => "Dry",
            Self::Stormy => "Stormy",
            Self::Dusty => "Dusty",
            Self::Freezing => "Freezing",
            Self::Mild => "Mild",
            Self::Windstorm => "Windstorm",
            Self::Blizzard => "Blizzard",
            Self::HeavyRain => "Heavy Rain",
            Self::LightRain => "Light Rain",
            Self::Hurricane => "Hurricane",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Look up the descriptive label for a prediction value
///
/// Never panics; anything outside the enumerated code set yields `"Unknown"`.
#[must_use]
pub fn condition_label(value: &PredictionValue) -> &'static str {
    Condition::from_prediction(value).label()
}
