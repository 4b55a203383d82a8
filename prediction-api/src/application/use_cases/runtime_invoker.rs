use crate::application::ports::{PredictionObserver, ProcessLauncher};
use crate::domain::{
    AttemptOutcome, InvocationAttempt, LaunchSpec, PredictError, PredictionEvent,
    RuntimePrediction,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Reply of the first candidate that completed cleanly
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeReply {
    pub prediction: RuntimePrediction,
    pub candidate: String,
    /// Number of candidates launched, the successful one included
    pub attempts: usize,
}

/// Delegates one request to the model runtime, falling back through the
/// configured candidates
///
/// Candidates are launched strictly one after another. The first clean exit
/// decides the request: its stdout either parses (success) or it does not
/// (protocol error, no further candidates). Launch failures, non-zero exits,
/// timeouts and pipe errors move on to the next candidate.
pub struct RuntimeInvoker<L>
where
    L: ProcessLauncher,
{
    launcher: Arc<L>,
    candidates: Vec<LaunchSpec>,
    timeout: Duration,
    observer: Arc<dyn PredictionObserver>,
}

impl<L> RuntimeInvoker<L>
where
    L: ProcessLauncher,
{
    pub fn new(
        launcher: Arc<L>,
        candidates: Vec<LaunchSpec>,
        timeout: Duration,
        observer: Arc<dyn PredictionObserver>,
    ) -> Self {
        Self {
            launcher,
            candidates,
            timeout,
            observer,
        }
    }

    pub async fn invoke(&self, request_id: Uuid, input: &[u8]) -> Result<RuntimeReply, PredictError> {
        let mut last_failure: Option<InvocationAttempt> = None;
        let mut launch_failures = 0;

        for (index, spec) in self.candidates.iter().enumerate() {
            let attempt = index + 1;
            let candidate = spec.name().to_string();
            self.observer.on_event(&PredictionEvent::AttemptStarted {
                request_id,
                attempt,
                candidate: candidate.clone(),
            });

            let started = Instant::now();
            let failure = match self.launcher.run(spec, input, self.timeout).await {
                Ok(output) if output.success() => {
                    return match RuntimePrediction::parse(&output.stdout) {
                        Ok(prediction) => {
                            self.observer.on_event(&PredictionEvent::RuntimeSucceeded {
                                request_id,
                                attempt,
                                candidate: candidate.clone(),
                                elapsed: started.elapsed(),
                                using_fallback: prediction.using_fallback,
                            });
                            Ok(RuntimeReply {
                                prediction,
                                candidate,
                                attempts: attempt,
                            })
                        }
                        Err(err) => {
                            self.observer.on_event(&PredictionEvent::ProtocolViolation {
                                request_id,
                                candidate: candidate.clone(),
                                reason: err.to_string(),
                            });
                            Err(PredictError::RuntimeProtocol {
                                candidate,
                                reason: err.to_string(),
                                raw_output: output.stdout_lossy(),
                            })
                        }
                    };
                }
                Ok(output) => InvocationAttempt::exited(attempt, candidate, &output),
                Err(err) => InvocationAttempt::aborted(attempt, candidate, AttemptOutcome::from(err)),
            };
            if failure.outcome.is_launch_failure() {
                launch_failures += 1;
            }

            self.observer.on_event(&PredictionEvent::AttemptFailed {
                request_id,
                failure: failure.clone(),
            });
            last_failure = Some(failure);
        }

        let attempts = self.candidates.len();
        let environment_missing = launch_failures == attempts;
        self.observer.on_event(&PredictionEvent::CandidatesExhausted {
            request_id,
            attempts,
            environment_missing,
        });

        Err(match last_failure {
            Some(last) => PredictError::RuntimeUnavailable {
                attempts,
                environment_missing,
                cause: format!("`{}` {}", last.candidate, last.outcome),
                last_stdout: last.stdout,
                last_stderr: last.stderr,
            },
            None => PredictError::RuntimeUnavailable {
                attempts: 0,
                environment_missing: true,
                cause: "no runtime candidates configured".to_string(),
                last_stdout: String::new(),
                last_stderr: String::new(),
            },
        })
    }
}
