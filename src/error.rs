//! Error types for the tracker core.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected form input, raised before anything reaches a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A numeric field did not parse.
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Why a stored workout line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected 4 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("{field} is not a non-negative integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

/// Errors surfaced by profile and storage operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The file to load does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file could not be opened, read, or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored line is malformed. `line` is 1-based.
    #[error("{}:{line}: {kind}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        kind: ParseErrorKind,
    },

    /// A JSON workout document could not be encoded or decoded.
    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A workout command was issued before any profile was created.
    #[error("no user profile has been created")]
    NoProfile,
}

impl TrackerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Maps an I/O error on `path`, turning `NotFound` into its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
