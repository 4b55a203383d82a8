use serde::{Deserialize, Serialize};
use std::fmt;

/// One configured way of starting the model runtime
///
/// Candidates differ only in how the interpreter is invoked (`python`,
/// `python3`, `py`, ...); the runtime protocol is the same for all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// Human readable name used in logs and error details
    #[serde(default)]
    pub label: Option<String>,
    /// Executable, resolved through `PATH` when not absolute
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl LaunchSpec {
    pub fn new(program: impl Into<String>) -> Self {
        LaunchSpec {
            label: None,
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Label if set, otherwise the program name
    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.program)
    }
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
