use std::path::{Path, PathBuf};

use crate::domain::branch::RemoteRef;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub remote: RemoteRef,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        Ok(Self {
            remote: RemoteRef::default(),
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}
