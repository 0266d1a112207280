use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for app-versioner operations
#[derive(Error, Debug)]
pub enum AppVersionerError {
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing field '{field}' in {}", path.display())]
    MissingField { path: PathBuf, field: String },

    #[error("Invalid bump kind: '{0}' (expected major, minor or patch)")]
    InvalidBumpKind(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(
        "Cannot copy {} into a subdirectory of itself ({})",
        src.display(),
        dst.display()
    )]
    CopyIntoSelf { src: PathBuf, dst: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in app-versioner
pub type Result<T> = std::result::Result<T, AppVersionerError>;

impl AppVersionerError {
    /// Create a not-found error for a path
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        AppVersionerError::NotFound(path.as_ref().to_path_buf())
    }

    /// Create a missing-field error for a descriptor path
    pub fn missing_field(path: impl AsRef<Path>, field: impl Into<String>) -> Self {
        AppVersionerError::MissingField {
            path: path.as_ref().to_path_buf(),
            field: field.into(),
        }
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AppVersionerError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AppVersionerError::Config(msg.into())
    }

    /// Maps an I/O error on `path` to `NotFound` when the file is missing.
    pub(crate) fn from_io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AppVersionerError::not_found(path)
        } else {
            AppVersionerError::Io(err)
        }
    }
}
