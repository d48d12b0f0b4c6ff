use async_trait::async_trait;

use crate::domain::branch::{BranchName, RemoteRef};
use crate::domain::change::ChangeSummary;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Fetches `remote`; fails with `RemoteUnavailable` when the fetch exits non-zero.
    async fn fetch_remote(&self, remote: &RemoteRef) -> AppResult<()>;
    /// Per-file line counts between the index and the fetched remote branch.
    async fn local_changes(&self, remote: &RemoteRef) -> AppResult<Vec<ChangeSummary>>;
    /// Trimmed value of a dotted config key, or an empty string when unset.
    async fn config_value(&self, key: &str) -> AppResult<String>;
    async fn current_branch(&self) -> AppResult<BranchName>;
}
