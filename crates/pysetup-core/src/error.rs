//! Unified error handling for the core crate.
//!
//! [`SetupError`] wraps domain and application errors so callers deal with a
//! single type, while each layer keeps its own suggestions and category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum SetupError {
    /// Errors from the domain layer (unknown preset, invalid field).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (serialization, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SetupError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type SetupResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn unknown_preset_is_not_found() {
        let err: SetupError = DomainError::PresetNotFound {
            name: "django".into(),
            available: vec!["library"],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn existing_output_is_conflict() {
        let err: SetupError = ApplicationError::OutputExists {
            path: PathBuf::from("pyproject.toml"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn display_is_transparent() {
        let err: SetupError = DomainError::InvalidField {
            field: "name",
            reason: "a project name is required".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid value for 'name': a project name is required"
        );
    }
}
