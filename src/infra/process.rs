use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::AppResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    fn from_status(status: ExitStatus, stdout: String) -> Self {
        Self {
            code: status.code(),
            stdout,
        }
    }
}

/// Runs a single external tool and reports its exit code and output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs with stdout captured; stderr is inherited.
    async fn output(&self, args: &[&str]) -> AppResult<CommandOutput>;
    /// Runs with stdout and stderr discarded.
    async fn status(&self, args: &[&str]) -> AppResult<CommandOutput>;
}

pub struct ProcessRunner {
    program: String,
    workspace_root: PathBuf,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>, workspace_root: PathBuf) -> Self {
        Self {
            program: program.into(),
            workspace_root,
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .current_dir(&self.workspace_root)
            .stdin(Stdio::null());
        command
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn output(&self, args: &[&str]) -> AppResult<CommandOutput> {
        debug!(program = %self.program, ?args, "running command");
        let output = self
            .command(args)
            .stderr(Stdio::inherit())
            .output()
            .await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(code = ?output.status.code(), bytes = output.stdout.len(), "command finished");
        Ok(CommandOutput::from_status(output.status, stdout))
    }

    async fn status(&self, args: &[&str]) -> AppResult<CommandOutput> {
        debug!(program = %self.program, ?args, "running command quietly");
        let status = self
            .command(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        debug!(code = ?status.code(), "command finished");
        Ok(CommandOutput::from_status(status, String::new()))
    }
}
