//! Error types for fix-sql-queries.
//!
//! Every failure here is fatal: the run stops and the binary exits non-zero.
//! Each variant names the file involved so the message is actionable on its own.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid document {}: {message}", .path.display())]
    InvalidDocument { path: PathBuf, message: String },

    #[error("Failed to serialize document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    /// Create a read error for the given path.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a JSON parse error for the given path.
    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an error for a document that parsed but has the wrong shape.
    pub fn invalid_document(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }

    /// Create a write error for the given path.
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The file this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::InvalidDocument { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::Serialize { .. } => None,
        }
    }

    /// A hint for the user on how to fix the condition.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                "Check that the path exists or pass the correct file as PATH"
            }
            Self::Read { .. } => "Check that the file is readable by the current user",
            Self::Parse { .. } => "Validate the file with a JSON linter before retrying",
            Self::InvalidDocument { .. } => {
                "The file must contain a JSON object with 'tools' and/or 'resources' arrays"
            }
            Self::Serialize { .. } => "The document contains values that cannot be written back",
            Self::Write { .. } => "Check file permissions and free disk space",
        }
    }
}

/// Result type alias for rewriter operations.
pub type FixResult<T> = Result<T, FixError>;
