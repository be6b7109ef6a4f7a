use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found
    // ========================================================================
    #[error("unknown preset '{name}'")]
    PresetNotFound {
        name: String,
        /// Registry names, in registry order.
        available: Vec<&'static str>,
    },

    // ========================================================================
    // Validation
    // ========================================================================
    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path leaves the output directory: {path}")]
    PathEscapesRoot { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PresetNotFound { name, available } => {
                let mut suggestions = vec![
                    format!("'{name}' is not a known preset"),
                    "Available presets:".into(),
                ];
                for preset in available {
                    suggestions.push(format!("  • {preset}"));
                }
                suggestions.push("Run 'pyproject-setup list' for descriptions".into());
                suggestions
            }
            Self::InvalidField { field, .. } => vec![
                format!("Provide a non-empty value for '{field}'"),
                "Use --help for usage information".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{path}' must be relative to the output directory"),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{path}' must not contain '..' components"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PresetNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidField { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_every_choice() {
        let err = DomainError::PresetNotFound {
            name: "flask".into(),
            available: vec!["fastapi-backend", "library", "cli-tool"],
        };
        let suggestions = err.suggestions();
        for name in ["fastapi-backend", "library", "cli-tool"] {
            assert!(suggestions.iter().any(|s| s.contains(name)), "missing {name}");
        }
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn invalid_field_names_the_field() {
        let err = DomainError::InvalidField {
            field: "package_path",
            reason: "must not be empty".into(),
        };
        assert!(err.to_string().contains("package_path"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
