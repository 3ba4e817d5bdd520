//! Prediction service integration
//!
//! HTTP client for the weather prediction/simulation service. Normalizes
//! transport and application failures into a uniform error carrying a
//! human-readable message, and implements the application's
//! `PredictionPort`.

pub mod client;

pub use client::{PredictorClient, PredictorConfig, PredictorError};
