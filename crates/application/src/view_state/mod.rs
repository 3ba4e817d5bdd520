//! View state machines
//!
//! Transient, request-scoped state driving the prediction and simulation
//! screens. Nothing here is persisted. Both machines use a monotonically
//! increasing generation counter so that a stale, slower response arriving
//! after a later one never overwrites it.

mod prediction;
mod simulation;

pub use prediction::{PredictionState, PredictionView};
pub use simulation::SimulationView;

/// Token identifying one in-flight request generation
///
/// Returned by `begin_*` and required by `complete`; a token that is no
/// longer the latest generation is ignored on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) const fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub(crate) const fn generation(self) -> u64 {
        self.0
    }
}
