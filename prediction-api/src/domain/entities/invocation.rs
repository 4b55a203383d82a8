use std::fmt;
use std::time::Duration;

/// Everything a finished child process left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// How a failed attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Process ran to completion with a non-zero (or no) exit code
    Exited(Option<i32>),
    /// Process could not be started at all
    LaunchFailed(String),
    /// Process exceeded the per-candidate deadline and was killed
    TimedOut(Duration),
    /// Reading or writing one of the pipes failed
    PipeFailed(String),
}

impl AttemptOutcome {
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, AttemptOutcome::LaunchFailed(_))
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Exited(Some(code)) => write!(f, "exited with code {}", code),
            AttemptOutcome::Exited(None) => write!(f, "terminated by signal"),
            AttemptOutcome::LaunchFailed(reason) => write!(f, "failed to start: {}", reason),
            AttemptOutcome::TimedOut(after) => write!(f, "timed out after {}ms", after.as_millis()),
            AttemptOutcome::PipeFailed(reason) => write!(f, "pipe error: {}", reason),
        }
    }
}

/// Record of one failed launch, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationAttempt {
    /// 1-based position in the candidate list
    pub attempt: usize,
    pub candidate: String,
    pub stdout: String,
    pub stderr: String,
    pub outcome: AttemptOutcome,
}

impl InvocationAttempt {
    pub fn exited(attempt: usize, candidate: impl Into<String>, output: &ProcessOutput) -> Self {
        InvocationAttempt {
            attempt,
            candidate: candidate.into(),
            stdout: output.stdout_lossy(),
            stderr: output.stderr_lossy(),
            outcome: AttemptOutcome::Exited(output.exit_code),
        }
    }

    pub fn aborted(attempt: usize, candidate: impl Into<String>, outcome: AttemptOutcome) -> Self {
        InvocationAttempt {
            attempt,
            candidate: candidate.into(),
            stdout: String::new(),
            stderr: String::new(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_zero_exit() {
        let mut output = ProcessOutput::default();
        assert!(!output.success());
        output.exit_code = Some(0);
        assert!(output.success());
        output.exit_code = Some(2);
        assert!(!output.success());
    }

    #[test]
    fn test_exited_attempt_keeps_diagnostics() {
        let output = ProcessOutput {
            exit_code: Some(1),
            stdout: b"{\"status\": \"error\"}".to_vec(),
            stderr: b"ModuleNotFoundError: numpy".to_vec(),
        };
        let attempt = InvocationAttempt::exited(2, "python3", &output);
        assert_eq!(attempt.stderr, "ModuleNotFoundError: numpy");
        assert_eq!(attempt.outcome.to_string(), "exited with code 1");
        assert!(!attempt.outcome.is_launch_failure());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            AttemptOutcome::TimedOut(Duration::from_millis(1500)).to_string(),
            "timed out after 1500ms"
        );
        assert_eq!(
            AttemptOutcome::LaunchFailed("No such file or directory".into()).to_string(),
            "failed to start: No such file or directory"
        );
    }
}
