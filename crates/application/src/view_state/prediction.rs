//! Prediction screen state machine
//!
//! `Idle → Loading → Success | Failed → Loading → …`. A submit is rejected
//! locally (notifier invoked, no transition) when feature validation fails.
//! A failed request clears any previously displayed prediction: `Failed`
//! carries no outcome.

use std::sync::Arc;

use domain::{PredictionOutcome, WeatherFeatures};
use tracing::{debug, error};

use crate::error::ApplicationError;
use crate::ports::{Notification, Notifier, PredictionPort};
use crate::view_state::RequestToken;

/// State of the prediction screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionState {
    /// No prediction yet, nothing in flight
    #[default]
    Idle,
    /// A submit is awaiting the gateway
    Loading,
    /// Latest prediction result
    Success(PredictionOutcome),
    /// The latest submit failed; failure was surfaced via the notifier
    Failed,
}

/// View state for the prediction screen
pub struct PredictionView<P, N> {
    port: Arc<P>,
    notifier: Arc<N>,
    state: PredictionState,
    generation: u64,
}

impl<P, N> std::fmt::Debug for PredictionView<P, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionView")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<P: PredictionPort, N: Notifier> PredictionView<P, N> {
    /// Create a new view in the `Idle` state
    #[must_use]
    pub fn new(port: Arc<P>, notifier: Arc<N>) -> Self {
        Self {
            port,
            notifier,
            state: PredictionState::Idle,
            generation: 0,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &PredictionState {
        &self.state
    }

    /// Whether a submit is awaiting the gateway
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, PredictionState::Loading)
    }

    /// The displayed outcome, if the latest submit succeeded
    #[must_use]
    pub const fn outcome(&self) -> Option<&PredictionOutcome> {
        match &self.state {
            PredictionState::Success(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Validate and start a submit
    ///
    /// On validation failure the notifier is invoked and `None` is returned
    /// with no state change; the request must not be sent. Otherwise the
    /// view enters `Loading` and the caller drives the gateway call,
    /// finishing with [`complete`](Self::complete).
    pub fn begin_submit(&mut self, features: &WeatherFeatures) -> Option<RequestToken> {
        if let Err(e) = features.validate() {
            debug!(error = %e, "Rejecting submit with invalid features");
            self.notifier
                .notify(&Notification::destructive("Invalid Input", e.to_string()));
            return None;
        }
        self.generation += 1;
        self.state = PredictionState::Loading;
        Some(RequestToken::new(self.generation))
    }

    /// Apply the result of the gateway call started by `begin_submit`
    ///
    /// A token that is no longer the latest generation is ignored: the view
    /// must reflect the request issued last, not the response that arrives
    /// last.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<PredictionOutcome, ApplicationError>,
    ) {
        if token.generation() != self.generation {
            debug!(
                stale = token.generation(),
                current = self.generation,
                "Ignoring stale prediction response"
            );
            return;
        }
        match result {
            Ok(outcome) => self.state = PredictionState::Success(outcome),
            Err(e) => {
                error!(error = %e, "Prediction request failed");
                self.notifier
                    .notify(&Notification::destructive("Prediction Error", e.to_string()));
                self.state = PredictionState::Failed;
            },
        }
    }

    /// Submit a feature vector end to end
    pub async fn submit(&mut self, features: WeatherFeatures) {
        let Some(token) = self.begin_submit(&features) else {
            return;
        };
        let result = self.port.predict(&features).await;
        self.complete(token, result);
    }
}
