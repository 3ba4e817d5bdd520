//! Weather feature vectors
//!
//! Two wire schemas are supported: the basic six-field vector and the
//! station-style vector with dew point, snow, gusts, and clock fields.
//! Field names match the prediction service exactly. Validation runs before
//! a vector is ever submitted; an out-of-range vector never reaches the
//! network.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{ClockHour, DayOfWeek, Percentage, WindDirection};

/// Basic weather feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicFeatures {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Precipitation in mm
    pub precipitation: f64,
    /// Surface pressure in hPa
    pub pressure: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: f64,
}

impl BasicFeatures {
    /// Validate finiteness and field ranges
    ///
    /// # Errors
    ///
    /// Returns a field-specific `DomainError::InvalidFeature` for the first
    /// violation found.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_finite("temperature", "Temperature", self.temperature)?;
        ensure_finite("humidity", "Humidity", self.humidity)?;
        ensure_finite("wind_speed", "Wind speed", self.wind_speed)?;
        ensure_finite("precipitation", "Precipitation", self.precipitation)?;
        ensure_finite("pressure", "Pressure", self.pressure)?;
        ensure_finite("cloud_cover", "Cloud cover", self.cloud_cover)?;

        Percentage::new(self.humidity).map_err(|_| {
            DomainError::invalid_feature("humidity", "Humidity must be between 0 and 100%")
        })?;
        Percentage::new(self.cloud_cover).map_err(|_| {
            DomainError::invalid_feature("cloud_cover", "Cloud cover must be between 0 and 100%")
        })?;
        Ok(())
    }
}

impl Default for BasicFeatures {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 65.0,
            wind_speed: 10.0,
            precipitation: 0.0,
            pressure: 1013.0,
            cloud_cover: 30.0,
        }
    }
}

/// Station-style weather feature vector
///
/// Uses meteorological station field abbreviations. The `hour` and
/// `day_of_week` fields default to the current local time and can be
/// re-synced with [`StationFeatures::refresh_clock`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationFeatures {
    /// Temperature in Celsius
    pub temp: f64,
    /// Dew point in Celsius
    pub dwpt: f64,
    /// Relative humidity percentage (0-100)
    pub rhum: f64,
    /// Precipitation in mm
    pub prcp: f64,
    /// Snowfall in mm
    pub snow: f64,
    /// Wind direction in degrees (0-360)
    pub wdir: f64,
    /// Wind speed in km/h
    pub wspd: f64,
    /// Wind gust speed in km/h
    pub wpgt: f64,
    /// Surface pressure in hPa
    pub pres: f64,
    /// Hour of day (0-23)
    pub hour: u8,
    /// Day of week (0 = Monday, 6 = Sunday)
    pub day_of_week: u8,
}

impl StationFeatures {
    /// Create a vector with the given measurements and the clock fields
    /// taken from local time
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn now(
        temp: f64,
        dwpt: f64,
        rhum: f64,
        prcp: f64,
        snow: f64,
        wdir: f64,
        wspd: f64,
        wpgt: f64,
        pres: f64,
    ) -> Self {
        Self {
            temp,
            dwpt,
            rhum,
            prcp,
            snow,
            wdir,
            wspd,
            wpgt,
            pres,
            hour: ClockHour::now_local().value(),
            day_of_week: DayOfWeek::today_local().value(),
        }
    }

    /// Re-sync `hour` and `day_of_week` with the current local time
    pub fn refresh_clock(&mut self) {
        self.hour = ClockHour::now_local().value();
        self.day_of_week = DayOfWeek::today_local().value();
    }

    /// Validate finiteness and field ranges
    ///
    /// # Errors
    ///
    /// Returns a field-specific `DomainError::InvalidFeature` for the first
    /// violation found.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_finite("temp", "Temperature", self.temp)?;
        ensure_finite("dwpt", "Dew point", self.dwpt)?;
        ensure_finite("rhum", "Relative humidity", self.rhum)?;
        ensure_finite("prcp", "Precipitation", self.prcp)?;
        ensure_finite("snow", "Snowfall", self.snow)?;
        ensure_finite("wdir", "Wind direction", self.wdir)?;
        ensure_finite("wspd", "Wind speed", self.wspd)?;
        ensure_finite("wpgt", "Wind gust", self.wpgt)?;
        ensure_finite("pres", "Pressure", self.pres)?;

        Percentage::new(self.rhum).map_err(|_| {
            DomainError::invalid_feature("rhum", "Relative humidity must be between 0 and 100%")
        })?;
        WindDirection::new(self.wdir).map_err(|_| {
            DomainError::invalid_feature("wdir", "Wind direction must be between 0 and 360 degrees")
        })?;
        ClockHour::new(self.hour).map_err(|_| {
            DomainError::invalid_feature("hour", "Hour must be between 0 and 23")
        })?;
        DayOfWeek::new(self.day_of_week).map_err(|_| {
            DomainError::invalid_feature("day_of_week", "Day of week must be between 0 and 6")
        })?;
        Ok(())
    }
}

/// A feature vector in either supported schema
///
/// Serializes as the flat field map of the underlying variant, matching
/// what the prediction service expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherFeatures {
    /// Station-style vector (tried first: it has the larger field set)
    Station(StationFeatures),
    /// Basic six-field vector
    Basic(BasicFeatures),
}

impl WeatherFeatures {
    /// Validate the underlying vector
    ///
    /// # Errors
    ///
    /// Returns a field-specific `DomainError::InvalidFeature` for the first
    /// violation found.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::Basic(f) => f.validate(),
            Self::Station(f) => f.validate(),
        }
    }
}

impl From<BasicFeatures> for WeatherFeatures {
    fn from(f: BasicFeatures) -> Self {
        Self::Basic(f)
    }
}

impl From<StationFeatures> for WeatherFeatures {
    fn from(f: StationFeatures) -> Self {
        Self::Station(f)
    }
}

fn ensure_finite(field: &'static str, label: &str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::invalid_feature(
            field,
            format!("{label} must be a finite number"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_sample() -> StationFeatures {
        StationFeatures {
            temp: 18.5,
            dwpt: 12.0,
            rhum: 66.0,
            prcp: 0.2,
            snow: 0.0,
            wdir: 225.0,
            wspd: 14.0,
            wpgt: 22.0,
            pres: 1016.0,
            hour: 14,
            day_of_week: 2,
        }
    }

    #[test]
    fn basic_defaults_are_valid() {
        assert!(BasicFeatures::default().validate().is_ok());
    }

    #[test]
    fn basic_rejects_humidity_out_of_range() {
        let features = BasicFeatures {
            humidity: 120.0,
            ..Default::default()
        };
        let err = features.validate().unwrap_err();
        assert_eq!(err.to_string(), "Humidity must be between 0 and 100%");
    }

    #[test]
    fn basic_rejects_negative_humidity() {
        let features = BasicFeatures {
            humidity: -1.0,
            ..Default::default()
        };
        assert!(features.validate().is_err());
    }

    #[test]
    fn basic_rejects_cloud_cover_out_of_range() {
        let features = BasicFeatures {
            cloud_cover: 101.0,
            ..Default::default()
        };
        let err = features.validate().unwrap_err();
        assert_eq!(err.to_string(), "Cloud cover must be between 0 and 100%");
    }

    #[test]
    fn basic_rejects_non_finite() {
        let features = BasicFeatures {
            temperature: f64::NAN,
            ..Default::default()
        };
        let err = features.validate().unwrap_err();
        assert_eq!(err.to_string(), "Temperature must be a finite number");
    }

    #[test]
    fn station_sample_is_valid() {
        assert!(station_sample().validate().is_ok());
    }

    #[test]
    fn station_rejects_wdir_out_of_range() {
        let features = StationFeatures {
            wdir: 361.0,
            ..station_sample()
        };
        let err = features.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wind direction must be between 0 and 360 degrees"
        );
    }

    #[test]
    fn station_rejects_rhum_out_of_range() {
        let features = StationFeatures {
            rhum: 100.5,
            ..station_sample()
        };
        let err = features.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Relative humidity must be between 0 and 100%"
        );
    }

    #[test]
    fn station_now_fills_clock_fields() {
        let features = StationFeatures::now(18.5, 12.0, 66.0, 0.2, 0.0, 225.0, 14.0, 22.0, 1016.0);
        assert!(features.hour <= ClockHour::MAX);
        assert!(features.day_of_week <= DayOfWeek::MAX);
        assert!(features.validate().is_ok());
    }

    #[test]
    fn refresh_clock_stays_in_range() {
        let mut features = StationFeatures {
            hour: 99,
            day_of_week: 99,
            ..station_sample()
        };
        features.refresh_clock();
        assert!(features.validate().is_ok());
    }

    #[test]
    fn basic_serializes_with_wire_field_names() {
        let json = serde_json::to_value(WeatherFeatures::from(BasicFeatures::default())).unwrap();
        assert!((json["temperature"].as_f64().unwrap() - 25.0).abs() < f64::EPSILON);
        assert!((json["humidity"].as_f64().unwrap() - 65.0).abs() < f64::EPSILON);
        assert!(json.get("temp").is_none());
    }

    #[test]
    fn station_serializes_with_wire_field_names() {
        let json = serde_json::to_value(WeatherFeatures::from(station_sample())).unwrap();
        assert!((json["temp"].as_f64().unwrap() - 18.5).abs() < f64::EPSILON);
        assert_eq!(json["hour"].as_u64().unwrap(), 14);
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn untagged_deserialization_picks_correct_variant() {
        let basic: WeatherFeatures = serde_json::from_value(serde_json::json!({
            "temperature": 25.0, "humidity": 65.0, "wind_speed": 10.0,
            "precipitation": 0.0, "pressure": 1013.0, "cloud_cover": 30.0
        }))
        .unwrap();
        assert!(matches!(basic, WeatherFeatures::Basic(_)));

        let station: WeatherFeatures = serde_json::from_value(serde_json::json!({
            "temp": 18.5, "dwpt": 12.0, "rhum": 66.0, "prcp": 0.2, "snow": 0.0,
            "wdir": 225.0, "wspd": 14.0, "wpgt": 22.0, "pres": 1016.0,
            "hour": 14, "day_of_week": 2
        }))
        .unwrap();
        assert!(matches!(station, WeatherFeatures::Station(_)));
    }
}
