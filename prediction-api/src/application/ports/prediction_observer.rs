use crate::domain::PredictionEvent;

/// Receives structured progress events for each prediction request
///
/// Replaces ad-hoc console output: the orchestrator never logs runtime
/// diagnostics itself, it reports them here.
pub trait PredictionObserver: Send + Sync {
    fn on_event(&self, event: &PredictionEvent);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PredictionObserver for NoopObserver {
    fn on_event(&self, _event: &PredictionEvent) {}
}
