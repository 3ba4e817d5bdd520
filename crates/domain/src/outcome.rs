//! Prediction outcome types
//!
//! Mirrors the wire shape returned by the prediction service: a label that
//! may arrive as either a string or a number, plus an optional map of class
//! probabilities. Probabilities are never renormalized.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A predicted class label, as a string or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionValue {
    /// Numeric class code (classification) or regression output
    Number(f64),
    /// String class label
    Text(String),
}

impl PredictionValue {
    /// Coerce to an integer condition code, if the value represents one
    ///
    /// Numeric strings are accepted. Non-numeric text, negative numbers,
    /// and numbers with a fractional part yield `None`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_code(&self) -> Option<usize> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if n.is_finite() && n >= 0.0 && n.fract() == 0.0 {
            Some(n as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for PredictionValue {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for PredictionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for PredictionValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// The result of a single prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Predicted class label
    pub prediction: PredictionValue,
    /// Per-class probabilities in [0,1]; absent for regression models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,
}

impl PredictionOutcome {
    /// Whether there are any probabilities to display
    #[must_use]
    pub fn has_probabilities(&self) -> bool {
        self.probabilities.as_ref().is_some_and(|p| !p.is_empty())
    }
}
