//! Model runtime configuration
//!
//! JSON file describing how the model runtime is started:
//! - the ordered launch candidates (interpreters, tried first to last)
//! - the script every candidate runs
//! - the per-candidate deadline

use crate::domain::LaunchSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`RuntimeConfig::script`]
pub const SCRIPT_ENV: &str = "MODEL_SCRIPT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: std::io::Error },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No runtime candidates configured")]
    NoCandidates,

    #[error("Candidate #{0} has an empty program")]
    EmptyProgram(usize),

    #[error("timeout_ms must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Model script, appended as the last argument of every candidate
    #[serde(default)]
    pub script: Option<String>,

    /// Launch candidates in fallback order
    pub candidates: Vec<LaunchSpec>,

    /// Per-candidate deadline in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Working directory of the child processes (inherited when unset)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl RuntimeConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|error| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error,
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded default: `python`, `python3`, `py` running `model/predict.py`
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(include_str!("default_runtime.json"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidates.is_empty() {
            return Err(ConfigError::NoCandidates);
        }
        if let Some(index) = self
            .candidates
            .iter()
            .position(|c| c.program.trim().is_empty())
        {
            return Err(ConfigError::EmptyProgram(index + 1));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Replace the script when `script` is set
    pub fn with_script_override(mut self, script: Option<String>) -> Self {
        if let Some(script) = script.filter(|s| !s.trim().is_empty()) {
            self.script = Some(script);
        }
        self
    }

    /// Apply the `MODEL_SCRIPT` environment override
    pub fn with_env_overrides(self) -> Self {
        let script = std::env::var(SCRIPT_ENV).ok();
        self.with_script_override(script)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Candidates as launched, script appended
    pub fn launch_specs(&self) -> Vec<LaunchSpec> {
        self.candidates
            .iter()
            .map(|candidate| match &self.script {
                Some(script) => candidate.clone().arg(script.as_str()),
                None => candidate.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default() {
        let config = RuntimeConfig::load_default().unwrap();
        config.validate().unwrap();

        let programs: Vec<_> = config.candidates.iter().map(|c| c.program.as_str()).collect();
        assert_eq!(programs, vec!["python", "python3", "py"]);
        assert_eq!(config.script.as_deref(), Some("model/predict.py"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.working_dir.is_none());
    }

    #[test]
    fn test_launch_specs_append_script() {
        let config = RuntimeConfig::load_default().unwrap();
        let specs = config.launch_specs();
        assert_eq!(specs.len(), 3);
        assert!(specs.iter().all(|s| s.args == vec!["model/predict.py"]));
        assert_eq!(specs[1].to_string(), "python3 model/predict.py");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = RuntimeConfig::from_json(
            r#"{"candidates": [{"label": "venv", "program": "/opt/venv/bin/python", "args": ["-u"]}]}"#,
        )
        .unwrap();

        assert_eq!(config.timeout_ms, 30_000);
        assert!(config.script.is_none());
        let specs = config.launch_specs();
        assert_eq!(specs[0].name(), "venv");
        assert_eq!(specs[0].args, vec!["-u"]);
    }

    #[test]
    fn test_script_comes_after_candidate_args() {
        let config = RuntimeConfig::from_json(
            r#"{"script": "predict.py", "candidates": [{"program": "python3", "args": ["-u"]}]}"#,
        )
        .unwrap();
        assert_eq!(config.launch_specs()[0].args, vec!["-u", "predict.py"]);
    }

    #[test]
    fn test_script_override() {
        let config = RuntimeConfig::load_default()
            .unwrap()
            .with_script_override(Some("/srv/model/run.py".to_string()));
        assert_eq!(config.script.as_deref(), Some("/srv/model/run.py"));

        let unchanged = RuntimeConfig::load_default()
            .unwrap()
            .with_script_override(Some("  ".to_string()));
        assert_eq!(unchanged.script.as_deref(), Some("model/predict.py"));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let empty = RuntimeConfig::from_json(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(empty.validate(), Err(ConfigError::NoCandidates)));

        let blank = RuntimeConfig::from_json(
            r#"{"candidates": [{"program": "python"}, {"program": " "}]}"#,
        )
        .unwrap();
        assert!(matches!(blank.validate(), Err(ConfigError::EmptyProgram(2))));

        let zero = RuntimeConfig::from_json(r#"{"candidates": [{"program": "python"}], "timeout_ms": 0}"#)
            .unwrap();
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RuntimeConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RuntimeConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
