use crate::application::ports::{LaunchError, ProcessLauncher};
use crate::domain::{LaunchSpec, ProcessOutput};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};

/// Launches candidates as real child processes
///
/// Stdin is written while stdout and stderr are drained, so a child that
/// produces more output than a pipe buffer holds before reading its input
/// cannot deadlock the exchange. Children are spawned with `kill_on_drop`,
/// every early return releases the process.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessLauncher {
    working_dir: Option<PathBuf>,
}

impl TokioProcessLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_working_dir(working_dir: Option<PathBuf>) -> Self {
        TokioProcessLauncher { working_dir }
    }

    fn command(&self, spec: &LaunchSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

#[async_trait]
impl ProcessLauncher for TokioProcessLauncher {
    async fn run(
        &self,
        spec: &LaunchSpec,
        input: &[u8],
        timeout: Duration,
    ) -> Result<ProcessOutput, LaunchError> {
        let mut child = self.command(spec).spawn().map_err(|e| LaunchError::Spawn {
            program: spec.program.clone(),
            reason: e.to_string(),
        })?;

        let result = tokio::time::timeout(timeout, exchange(&mut child, input)).await;
        match result {
            Ok(output) => output,
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::debug!(program = %spec.program, error = %e, "Failed to kill timed out child");
                }
                Err(LaunchError::TimedOut(timeout))
            }
        }
    }
}

/// Feed `input` to the child and collect everything it prints until exit
async fn exchange(child: &mut Child, input: &[u8]) -> Result<ProcessOutput, LaunchError> {
    let mut stdin = child.stdin.take().ok_or_else(|| pipe_missing("stdin"))?;
    let mut stdout = child.stdout.take().ok_or_else(|| pipe_missing("stdout"))?;
    let mut stderr = child.stderr.take().ok_or_else(|| pipe_missing("stderr"))?;

    let write = async move {
        let written = match stdin.write_all(input).await {
            Ok(()) => stdin.shutdown().await,
            Err(e) => Err(e),
        };
        drop(stdin);
        match written {
            // Child exited without reading its input; the exit status decides
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let (written, read_out, read_err) = tokio::join!(
        write,
        stdout.read_to_end(&mut out),
        stderr.read_to_end(&mut err)
    );
    written.map_err(|e| pipe_error("stdin", e))?;
    read_out.map_err(|e| pipe_error("stdout", e))?;
    read_err.map_err(|e| pipe_error("stderr", e))?;

    let status = child.wait().await.map_err(|e| pipe_error("wait", e))?;

    Ok(ProcessOutput {
        exit_code: status.code(),
        stdout: out,
        stderr: err,
    })
}

fn pipe_missing(name: &str) -> LaunchError {
    LaunchError::Pipe(format!("{} was not captured", name))
}

fn pipe_error(name: &str, error: io::Error) -> LaunchError {
    LaunchError::Pipe(format!("{}: {}", name, error))
}
