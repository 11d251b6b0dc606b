use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreatorError {
    #[error("Invalid app name: {0:?}")]
    InvalidName(String),
    #[error("Already exists: {0:?}")]
    AlreadyExists(PathBuf),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to render line template: {0}")]
    Template(String),
}

impl CreatorError {
    /// Maps an I/O error on `path` to the matching variant, so "file exists"
    /// and "no such file" surface as `AlreadyExists` and `NotFound`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::AlreadyExists => CreatorError::AlreadyExists(path),
            std::io::ErrorKind::NotFound => CreatorError::NotFound(format!("{:?}", path)),
            _ => CreatorError::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, CreatorError>;
