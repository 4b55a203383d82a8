use crate::domain::entities::InvocationAttempt;
use market_signal::SentimentScore;
use std::time::Duration;
use uuid::Uuid;

/// Progress of one prediction request, reported to the observer port
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionEvent {
    /// Request validated and scored; runtime invocation about to start
    RequestAccepted {
        request_id: Uuid,
        sentiment: SentimentScore,
        headline_chars: usize,
    },
    /// A candidate is being launched
    AttemptStarted {
        request_id: Uuid,
        attempt: usize,
        candidate: String,
    },
    /// A candidate failed; the next one (if any) is tried
    AttemptFailed {
        request_id: Uuid,
        failure: InvocationAttempt,
    },
    /// A candidate exited cleanly with a valid reply
    RuntimeSucceeded {
        request_id: Uuid,
        attempt: usize,
        candidate: String,
        elapsed: Duration,
        using_fallback: bool,
    },
    /// A candidate exited cleanly but its reply was unusable
    ProtocolViolation {
        request_id: Uuid,
        candidate: String,
        reason: String,
    },
    /// Every candidate failed
    CandidatesExhausted {
        request_id: Uuid,
        attempts: usize,
        environment_missing: bool,
    },
}
