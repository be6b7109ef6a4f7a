//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The manifest could not be turned into text.
    #[error("Failed to serialize pyproject.toml: {reason}")]
    SerializationFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A target file is already present and overwriting was not requested.
    #[error("{path} already exists")]
    OutputExists { path: PathBuf },

    /// In-memory state lock was poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SerializationFailed { .. } => vec![
                "This is a bug in pyproject-setup".into(),
                "Re-run with -vv and include the log when reporting it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("Refusing to overwrite {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose another directory with --output".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutputExists { .. } => ErrorCategory::Conflict,
            Self::SerializationFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
