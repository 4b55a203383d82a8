use crate::application::ports::PredictionObserver;
use crate::domain::PredictionEvent;

/// Writes prediction events as structured `tracing` records
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        TracingObserver
    }
}

impl PredictionObserver for TracingObserver {
    fn on_event(&self, event: &PredictionEvent) {
        match event {
            PredictionEvent::RequestAccepted {
                request_id,
                sentiment,
                headline_chars,
            } => {
                tracing::info!(%request_id, %sentiment, headline_chars, "Prediction request accepted");
            }
            PredictionEvent::AttemptStarted {
                request_id,
                attempt,
                candidate,
            } => {
                tracing::debug!(%request_id, attempt, candidate = %candidate, "Launching model runtime");
            }
            PredictionEvent::AttemptFailed {
                request_id,
                failure,
            } => {
                tracing::warn!(
                    %request_id,
                    attempt = failure.attempt,
                    candidate = %failure.candidate,
                    outcome = %failure.outcome,
                    stderr = %failure.stderr.trim_end(),
                    "Model runtime candidate failed"
                );
            }
            PredictionEvent::RuntimeSucceeded {
                request_id,
                attempt,
                candidate,
                elapsed,
                using_fallback,
            } => {
                tracing::info!(
                    %request_id,
                    attempt,
                    candidate = %candidate,
                    elapsed_ms = elapsed.as_millis() as u64,
                    using_fallback,
                    "Model runtime replied"
                );
            }
            PredictionEvent::ProtocolViolation {
                request_id,
                candidate,
                reason,
            } => {
                tracing::error!(%request_id, candidate = %candidate, reason = %reason, "Unreadable model runtime reply");
            }
            PredictionEvent::CandidatesExhausted {
                request_id,
                attempts,
                environment_missing,
            } => {
                tracing::error!(
                    %request_id,
                    attempts,
                    environment_missing,
                    "All model runtime candidates failed"
                );
            }
        }
    }
}
