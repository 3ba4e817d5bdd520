//! Application layer for WeatherWise
//!
//! Defines the ports to the prediction service and the notifier, the view
//! state machines that drive the prediction and simulation screens, and the
//! pure presentation projection of a prediction outcome.

pub mod error;
pub mod ports;
pub mod presenter;
pub mod view_state;

pub use error::ApplicationError;
pub use ports::{Notification, Notifier, PredictionPort, Severity};
pub use presenter::{PredictionReport, ProbabilityRow, WeatherGlyph};
pub use view_state::{PredictionState, PredictionView, RequestToken, SimulationView};
