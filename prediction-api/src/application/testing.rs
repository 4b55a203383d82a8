//! Test doubles for the application ports

use crate::application::ports::{LaunchError, PredictionObserver, ProcessLauncher};
use crate::domain::{LaunchSpec, PredictionEvent, ProcessOutput};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

pub const VALID_REPLY: &str = r#"{
    "prediction": 45210.5,
    "confidence": 0.82,
    "model_performance": {"rmse": 97.08, "mae": 52.16, "r2": 0.995},
    "feature_importance": [{"feature": "Open Price", "importance": 0.25}],
    "individual_predictions": {
        "random_forest": 45100.0, "ridge": 45300.0, "xgboost": 45250.0, "meta_model": 45210.5
    },
    "using_fallback": false,
    "status": "success"
}"#;

pub fn clean_exit(stdout: &str) -> Result<ProcessOutput, LaunchError> {
    Ok(ProcessOutput {
        exit_code: Some(0),
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    })
}

pub fn failed_exit(code: i32, stderr: &str) -> Result<ProcessOutput, LaunchError> {
    Ok(ProcessOutput {
        exit_code: Some(code),
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    })
}

pub fn not_found(program: &str) -> Result<ProcessOutput, LaunchError> {
    Err(LaunchError::Spawn {
        program: program.to_string(),
        reason: "No such file or directory (os error 2)".to_string(),
    })
}

/// Plays back a fixed sequence of outcomes, one per launch
#[derive(Default)]
pub struct ScriptedLauncher {
    outcomes: Mutex<VecDeque<Result<ProcessOutput, LaunchError>>>,
    calls: Mutex<Vec<(String, Vec<u8>)>>,
}

impl ScriptedLauncher {
    pub fn new(outcomes: Vec<Result<ProcessOutput, LaunchError>>) -> Self {
        ScriptedLauncher {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Programs launched so far, in order
    pub fn launched(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(p, _)| p.clone()).collect()
    }

    /// Stdin bytes of the most recent launch
    pub fn last_input(&self) -> Option<Vec<u8>> {
        self.calls.lock().last().map(|(_, input)| input.clone())
    }
}

#[async_trait]
impl ProcessLauncher for ScriptedLauncher {
    async fn run(
        &self,
        spec: &LaunchSpec,
        input: &[u8],
        _timeout: Duration,
    ) -> Result<ProcessOutput, LaunchError> {
        self.calls.lock().push((spec.program.clone(), input.to_vec()));
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| not_found(&spec.program))
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<PredictionEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<PredictionEvent> {
        self.events.lock().clone()
    }
}

impl PredictionObserver for RecordingObserver {
    fn on_event(&self, event: &PredictionEvent) {
        self.events.lock().push(event.clone());
    }
}

pub fn candidates(programs: &[&str]) -> Vec<LaunchSpec> {
    programs.iter().map(|p| LaunchSpec::new(*p)).collect()
}
