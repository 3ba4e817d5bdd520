//! Simulation screen state machine
//!
//! Holds the latest batch of simulated scenarios plus an optional selection
//! index for the detail view. A run replaces the batch wholesale on success
//! and leaves it untouched on failure.

use std::sync::Arc;

use domain::{SimulatedSample, SimulationBatch, SimulationRequest};
use tracing::{debug, error};

use crate::error::ApplicationError;
use crate::ports::{Notification, Notifier, PredictionPort};
use crate::view_state::RequestToken;

/// View state for the simulation screen
pub struct SimulationView<P, N> {
    port: Arc<P>,
    notifier: Arc<N>,
    batch: Option<SimulationBatch>,
    selected: Option<usize>,
    loading: bool,
    generation: u64,
}

impl<P, N> std::fmt::Debug for SimulationView<P, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationView")
            .field("batch_len", &self.batch.as_ref().map(SimulationBatch::len))
            .field("selected", &self.selected)
            .field("loading", &self.loading)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<P: PredictionPort, N: Notifier> SimulationView<P, N> {
    /// Create a new view with no results
    #[must_use]
    pub fn new(port: Arc<P>, notifier: Arc<N>) -> Self {
        Self {
            port,
            notifier,
            batch: None,
            selected: None,
            loading: false,
            generation: 0,
        }
    }

    /// The current batch, if a run has succeeded
    #[must_use]
    pub const fn batch(&self) -> Option<&SimulationBatch> {
        self.batch.as_ref()
    }

    /// Index of the scenario in detailed view, if any
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The scenario in detailed view, if any
    #[must_use]
    pub fn selected(&self) -> Option<&SimulatedSample> {
        self.batch.as_ref()?.get(self.selected?)
    }

    /// Whether a run is awaiting the gateway
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Validate and start a simulation run
    ///
    /// On an out-of-range sample count the notifier is invoked and `None`
    /// is returned with no state change; the request must not be sent.
    pub fn begin_run(&mut self, request: &SimulationRequest) -> Option<RequestToken> {
        if let Err(e) = request.validate() {
            debug!(samples = request.samples, "Rejecting simulation run");
            self.notifier
                .notify(&Notification::destructive("Invalid Input", e.to_string()));
            return None;
        }
        self.generation += 1;
        self.loading = true;
        Some(RequestToken::new(self.generation))
    }

    /// Apply the result of the gateway call started by `begin_run`
    ///
    /// Stale tokens are ignored. On success the batch is replaced wholesale
    /// and the selection reset; on failure the previous batch stays as-is.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<SimulationBatch, ApplicationError>,
    ) {
        if token.generation() != self.generation {
            debug!(
                stale = token.generation(),
                current = self.generation,
                "Ignoring stale simulation response"
            );
            return;
        }
        self.loading = false;
        match result {
            Ok(batch) => {
                self.notifier.notify(&Notification::info(
                    "Simulation Complete",
                    format!("Generated {} weather scenarios", batch.len()),
                ));
                self.batch = Some(batch);
                self.selected = None;
            },
            Err(e) => {
                error!(error = %e, "Simulation request failed");
                self.notifier
                    .notify(&Notification::destructive("Simulation Error", e.to_string()));
            },
        }
    }

    /// Run a simulation end to end
    pub async fn run(&mut self, request: SimulationRequest) {
        let Some(token) = self.begin_run(&request) else {
            return;
        };
        let result = self.port.simulate(&request).await;
        self.complete(token, result);
    }

    /// Put scenario `index` in detailed view; no-op if out of bounds
    pub fn select(&mut self, index: usize) {
        if self.batch.as_ref().is_some_and(|b| index < b.len()) {
            self.selected = Some(index);
        }
    }

    /// Return to the table view
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
