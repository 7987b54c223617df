use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("There is no config file: {}", .path.display())]
    ConfigMissing { path: PathBuf },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Jira request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira answered, but not with a success status.
    #[error("Jira responded with {status}: {body}")]
    Api { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
