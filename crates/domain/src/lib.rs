//! Domain layer for WeatherWise
//!
//! Contains the weather feature vectors, validation rules, condition code
//! lookup, and prediction outcome types. This layer performs no I/O.

pub mod conditions;
pub mod errors;
pub mod features;
pub mod outcome;
pub mod season;
pub mod simulation;
pub mod value_objects;

pub use conditions::{Condition, condition_label};
pub use errors::DomainError;
pub use features::{BasicFeatures, StationFeatures, WeatherFeatures};
pub use outcome::{PredictionOutcome, PredictionValue};
pub use season::Season;
pub use simulation::{SimulatedSample, SimulationBatch, SimulationRequest};
pub use value_objects::*;
