use std::path::PathBuf;

use tarrytown_model::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Missing, unrecognised or malformed request input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The request resolved to a location outside the archive root.
    #[error("path escapes the archive root: {0}")]
    PathEscape(String),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed metadata in {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ArchiveError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wire classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArchiveError::InvalidInput(_) => ErrorKind::InvalidInput,
            ArchiveError::NotFound(_) => ErrorKind::NotFound,
            ArchiveError::PathEscape(_) => ErrorKind::PathEscape,
            ArchiveError::Io { .. } | ArchiveError::Metadata { .. } => {
                ErrorKind::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
