//! Error types for order source ingestion.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that make an order source unusable.
///
/// A source error ends the record sequence; rows yielded before it stay valid.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source does not exist.
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source exists but could not be opened or parsed.
    #[error("failed to read source {}: {message}", path.display())]
    SourceUnreadable { path: PathBuf, message: String },
}

impl SourceError {
    /// Classifies an I/O failure on `path`.
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::unreadable(path, err)
        }
    }

    pub fn unreadable(path: &Path, err: impl ToString) -> Self {
        Self::SourceUnreadable {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Path of the source the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceNotFound { path } | Self::SourceUnreadable { path, .. } => path,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, SourceError>;
