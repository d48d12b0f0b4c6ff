use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::branch::{BranchName, RemoteRef};
use crate::domain::change::ChangeSummary;
use crate::error::{AppError, AppResult};
use crate::infra::process::{CommandOutput, CommandRunner};
use crate::services::VersionControlService;

/// `git config` exits with 1 when the key is not set.
const CONFIG_KEY_UNSET: i32 = 1;

pub struct GitCli {
    runner: Arc<dyn CommandRunner>,
}

impl GitCli {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    async fn capture(&self, args: &[&str]) -> AppResult<String> {
        let output = self.runner.output(args).await?;
        if !output.success() {
            return Err(command_failed(args, &output));
        }
        Ok(output.stdout)
    }
}

fn command_failed(args: &[&str], output: &CommandOutput) -> AppError {
    let code = output
        .code
        .map(|code| code.to_string())
        .unwrap_or_else(|| "signal".to_string());
    AppError::VersionControl(format!("`git {}` exited with {code}", args.join(" ")))
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn fetch_remote(&self, remote: &RemoteRef) -> AppResult<()> {
        let output = self
            .runner
            .status(&["fetch", remote.remote.as_str(), remote.branch.as_str()])
            .await?;
        if !output.success() {
            warn!(%remote, code = ?output.code, "fetch failed");
            return Err(AppError::RemoteUnavailable {
                remote: remote.remote.clone(),
                branch: remote.branch.clone(),
            });
        }
        Ok(())
    }

    async fn local_changes(&self, remote: &RemoteRef) -> AppResult<Vec<ChangeSummary>> {
        let revision = remote.revision();
        let stdout = self
            .capture(&["diff-index", revision.as_str(), "--numstat"])
            .await?;
        let changes = ChangeSummary::parse_numstat(&stdout)?;
        debug!(files = changes.len(), %revision, "parsed local changes");
        Ok(changes)
    }

    async fn config_value(&self, key: &str) -> AppResult<String> {
        let args = ["config", key];
        let output = self.runner.output(&args).await?;
        match output.code {
            Some(0) => Ok(output.stdout.trim().to_string()),
            Some(CONFIG_KEY_UNSET) => {
                debug!(key, "config key not set");
                Ok(String::new())
            }
            _ => Err(command_failed(&args, &output)),
        }
    }

    async fn current_branch(&self) -> AppResult<BranchName> {
        let stdout = self
            .capture(&["rev-parse", "--abbrev-ref", "HEAD"])
            .await?;
        Ok(BranchName::from_output(&stdout))
    }
}
