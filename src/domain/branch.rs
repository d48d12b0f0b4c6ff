use std::fmt;

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "master";

/// A branch on a named remote, e.g. `origin/master`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRef {
    pub remote: String,
    pub branch: String,
}

impl RemoteRef {
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    /// The revision git resolves after a fetch.
    pub fn revision(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }
}

impl Default for RemoteRef {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE, DEFAULT_BRANCH)
    }
}

impl fmt::Display for RemoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.revision())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trims tool output without further validation; an empty name is kept as is.
    pub fn from_output(output: &str) -> Self {
        Self(output.trim().to_string())
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
