use chrono::Utc;
use tracing::{debug, info};

use crate::context::AppContext;
use crate::domain::report::ChangeReport;
use crate::domain::user::{EMAIL_KEY, NAME_KEY, User};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

/// Builds a report of the local changes with respect to the configured remote branch.
///
/// Steps run strictly in order and the first failure aborts the build, so a
/// failed fetch never reaches the diff and a missing identity never reaches
/// the branch lookup.
pub async fn build_change_report(ctx: &AppContext) -> AppResult<ChangeReport> {
    let report_time = Utc::now();
    let remote = &ctx.config.remote;
    let vcs = ctx.version_control.as_ref();

    debug!(%remote, "fetching remote branch");
    vcs.fetch_remote(remote).await?;

    let changes = vcs.local_changes(remote).await?;
    let user = resolve_user(vcs).await?;
    let local_branch = vcs.current_branch().await?;

    let report = ChangeReport::new(
        user,
        local_branch,
        remote.branch.clone(),
        changes,
        report_time,
    );
    info!(
        user = report.user().name(),
        email = report.user().email(),
        local_branch = report.local_branch().as_str(),
        remote_branch = report.remote_branch(),
        files = report.changes().len(),
        report_time = %report.report_time(),
        "change report ready"
    );

    Ok(report)
}

async fn resolve_user(vcs: &dyn VersionControlService) -> AppResult<User> {
    let name = vcs.config_value(NAME_KEY).await?;
    // Checked before User::new so an unset name never triggers the email lookup.
    if name.is_empty() {
        return Err(AppError::MissingConfiguration(NAME_KEY.to_string()));
    }

    let email = vcs.config_value(EMAIL_KEY).await?;
    User::new(name, email)
}
