use crate::domain::{AttemptOutcome, LaunchSpec, ProcessOutput};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("failed to start `{program}`: {reason}")]
    Spawn { program: String, reason: String },

    #[error("timed out after {0:?}")]
    TimedOut(Duration),

    #[error("pipe error: {0}")]
    Pipe(String),
}

impl From<LaunchError> for AttemptOutcome {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::Spawn { reason, .. } => AttemptOutcome::LaunchFailed(reason),
            LaunchError::TimedOut(after) => AttemptOutcome::TimedOut(after),
            LaunchError::Pipe(reason) => AttemptOutcome::PipeFailed(reason),
        }
    }
}

/// Runs one external process for one request
///
/// Implementations write `input` to the child's stdin, close it, collect
/// stdout and stderr until exit and release every handle before returning,
/// whatever the outcome. A process that outlives `timeout` is killed.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn run(
        &self,
        spec: &LaunchSpec,
        input: &[u8],
        timeout: Duration,
    ) -> Result<ProcessOutput, LaunchError>;
}
