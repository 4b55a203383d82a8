//! Classified failures of a prediction request

use market_signal::SnapshotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    /// Client input violates a snapshot rule
    #[error(transparent)]
    Validation(#[from] SnapshotError),

    /// No candidate launched and exited cleanly
    #[error("no model runtime completed after {attempts} attempt(s): {cause}")]
    RuntimeUnavailable {
        attempts: usize,
        /// Every attempt failed to even start (no interpreter installed)
        environment_missing: bool,
        cause: String,
        last_stdout: String,
        last_stderr: String,
    },

    /// A candidate exited cleanly but its reply could not be used
    #[error("model runtime `{candidate}` returned an unusable reply: {reason}")]
    RuntimeProtocol {
        candidate: String,
        reason: String,
        raw_output: String,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl PredictError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictError::Validation(_))
    }
}
