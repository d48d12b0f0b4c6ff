use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::branch::BranchName;
use crate::domain::change::ChangeSummary;
use crate::domain::user::User;

/// Snapshot of the local changes relative to a remote branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    user: User,
    local_branch: BranchName,
    remote_branch: String,
    changes: Vec<ChangeSummary>,
    report_time: DateTime<Utc>,
}

impl ChangeReport {
    pub fn new(
        user: User,
        local_branch: BranchName,
        remote_branch: String,
        changes: Vec<ChangeSummary>,
        report_time: DateTime<Utc>,
    ) -> Self {
        Self {
            user,
            local_branch,
            remote_branch,
            changes,
            report_time,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn local_branch(&self) -> &BranchName {
        &self.local_branch
    }

    pub fn remote_branch(&self) -> &str {
        &self.remote_branch
    }

    pub fn changes(&self) -> &[ChangeSummary] {
        &self.changes
    }

    pub fn report_time(&self) -> DateTime<Utc> {
        self.report_time
    }
}

impl fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChangeReport(user={}, local_branch={}, remote_branch={}, changes=[",
            self.user, self.local_branch, self.remote_branch
        )?;
        for (index, change) in self.changes.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{change}")?;
        }
        write!(
            f,
            "], report_time={})",
            self.report_time.to_rfc3339_opts(SecondsFormat::Micros, true)
        )
    }
}
