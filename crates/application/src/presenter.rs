//! Prediction presentation projection
//!
//! Pure functions turning a `PredictionOutcome` into a renderable report:
//! headline, condition label, glyph, and probability rows sorted descending.
//! Standalone by design, so the simulation detail view reuses it for any
//! single (features, outcome) pair.

use std::cmp::Ordering;

use domain::{PredictionOutcome, condition_label};

/// Pictogram category for a prediction label
///
/// A priority-ordered keyword classifier over the lowercased label text;
/// the first matching keyword wins, anything else falls through to `Sun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherGlyph {
    Rain,
    Cloud,
    Snow,
    Thunder,
    Fog,
    Drizzle,
    Sun,
}

impl WeatherGlyph {
    /// Classify a prediction label into a glyph
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("rain") || lower.contains("shower") {
            Self::Rain
        } else if lower.contains("cloud") {
            Self::Cloud
        } else if lower.contains("snow") {
            Self::Snow
        } else if lower.contains("thunder") || lower.contains("storm") {
            Self::Thunder
        } else if lower.contains("fog") || lower.contains("mist") {
            Self::Fog
        } else if lower.contains("drizzle") {
            Self::Drizzle
        } else {
            Self::Sun
        }
    }

    /// Get a pictographic representation
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Rain => "🌧️",
            Self::Cloud => "☁️",
            Self::Snow => "❄️",
            Self::Thunder => "⛈️",
            Self::Fog => "🌫️",
            Self::Drizzle => "🌦️",
            Self::Sun => "☀️",
        }
    }
}

/// One row of the probability listing
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    /// Class label
    pub label: String,
    /// Raw probability in [0,1] as returned by the service
    pub probability: f64,
    /// Displayed percentage, rounded to a whole number
    pub percent: u8,
}

/// Renderable projection of a prediction outcome
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    /// The prediction exactly as the service labelled it
    pub headline: String,
    /// Descriptive condition label (code lookup; `"Unknown"` outside the set)
    pub condition: &'static str,
    /// Pictogram category for the headline
    pub glyph: WeatherGlyph,
    /// Probability rows sorted descending; empty when the service sent none
    pub probabilities: Vec<ProbabilityRow>,
}

impl PredictionReport {
    /// Build the report for an outcome
    ///
    /// Probabilities are not renormalized; they are sorted descending by
    /// probability with ties broken by label for deterministic rendering.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_outcome(outcome: &PredictionOutcome) -> Self {
        let headline = outcome.prediction.to_string();
        let mut probabilities: Vec<ProbabilityRow> = outcome
            .probabilities
            .iter()
            .flatten()
            .map(|(label, &probability)| ProbabilityRow {
                label: label.clone(),
                probability,
                percent: (probability * 100.0).round().clamp(0.0, 100.0) as u8,
            })
            .collect();
        probabilities.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.label.cmp(&b.label))
        });

        Self {
            condition: condition_label(&outcome.prediction),
            glyph: WeatherGlyph::classify(&headline),
            headline,
            probabilities,
        }
    }
}
