use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing configuration: must specify '{0}' in .gitconfig")]
    MissingConfiguration(String),
    #[error(
        "unable to fetch remote branch {remote}/{branch}; are you sure this remote and branch exist?"
    )]
    RemoteUnavailable { remote: String, branch: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
