//! Error types for maxim

use thiserror::Error;

/// Main error type for the maxim application.
///
/// Soft conditions the interactive loop recovers from (non-numeric id,
/// unknown saying number, an unreadable record file at startup) are plain
/// messages, not variants here. Only failures that abort the session
/// surface as `MaximError`.
#[derive(Debug, Error)]
pub enum MaximError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MaximError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MaximError::Io(_) => 2,
            MaximError::Json(_) => 1,
        }
    }
}

/// Result type using MaximError
pub type Result<T> = std::result::Result<T, MaximError>;
