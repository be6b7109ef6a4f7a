//! CLI-level errors: every failure ends up here, gets a category, and that
//! category picks the process exit code.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use pysetup_core::error::SetupError;

pub use pysetup_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `pysetup-core`.
    #[error(transparent)]
    Core(#[from] SetupError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An interactive prompt failed (terminal closed, read error).
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not compiled into this build.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            source: None,
        }
    }

    /// Follow-up hints printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Rejected: {message}"),
                "See 'pyproject-setup init --help' for accepted values".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                message.clone(),
                "Run 'pyproject-setup config path' to locate the config file".into(),
                "Use 'pyproject-setup config init --force' to reset it".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                message.clone(),
                "Check that the output directory exists and is writable".into(),
            ],

            Self::Prompt { .. } => vec![
                "Run with --yes to skip prompts".into(),
                "Pass values with flags, e.g. --name and --preset".into(),
            ],

            Self::Cancelled => vec![
                "Nothing was written".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("This binary was built without the '{feature}' feature"),
                format!(
                    "Install with the feature enabled: cargo install pysetup-cli --features {}",
                    feature
                ),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Prompt { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message, suggestions and a `-v` hint, styled for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: Style| {
            if colored {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };
        let red = Style::new().red();
        let dim = Style::new().dimmed();

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", red.bold()),
            paint(&self.to_string(), red)
        );

        if verbose {
            for cause in self.causes() {
                out.push_str(&paint(&format!("  caused by: {cause}"), dim));
                out.push('\n');
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:", Style::new().yellow().bold()));
            out.push('\n');
            for line in &suggestions {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint("Re-run with -v / --verbose to see the cause chain.", dim));
            out.push('\n');
        }

        out
    }

    /// The `source()` chain, outermost first.
    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }

    /// Emit one structured event; user-side problems log at WARN.
    pub fn log(&self) {
        let category = self.category();
        let causes: Vec<String> = self.causes().map(ToString::to_string).collect();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code = self.exit_code(), ?causes, "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code = self.exit_code(), ?causes, "{self}")
            }
        }
    }
}

/// Coarse classification that decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad flags or values, existing output, cancelled prompt.
    UserError,
    /// Unknown preset.
    NotFound,
    /// Unreadable or invalid configuration.
    Configuration,
    /// I/O and anything else unexpected.
    Internal,
}

/// Attach a message to an I/O failure at the call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use pysetup_core::{application::ApplicationError, domain::DomainError};

    fn unknown_preset() -> CliError {
        CliError::Core(
            DomainError::PresetNotFound {
                name: "django".into(),
                available: vec!["fastapi-backend", "library", "cli-tool"],
            }
            .into(),
        )
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn unknown_preset_lists_available() {
        let suggestions = unknown_preset().suggestions();
        assert!(suggestions.iter().any(|s| s.contains("fastapi-backend")));
        assert!(suggestions.iter().any(|s| s.contains("cli-tool")));
    }

    #[test]
    fn existing_output_suggests_force() {
        let err = CliError::Core(
            ApplicationError::OutputExists {
                path: PathBuf::from("pyproject.toml"),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(CliError::invalid_input("x").exit_code(), 2);
        assert_eq!(CliError::Cancelled.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(unknown_preset().exit_code(), 3);
    }

    #[test]
    fn exit_code_invalid_field_is_user_error() {
        let err = CliError::Core(
            DomainError::InvalidField {
                field: "name",
                reason: "must not be empty".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = unknown_preset().format_plain(false);
        assert!(s.contains("Error: unknown preset 'django'"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("parse failure"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("caused by: parse failure"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn verbose_walks_the_whole_cause_chain() {
        let inner = anyhow::anyhow!("expected a table").context("reading pysetup.toml");
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(inner.into()),
        };
        let causes: Vec<String> = err.causes().map(ToString::to_string).collect();
        assert_eq!(causes, ["reading pysetup.toml", "expected a table"]);

        let s = err.format_plain(true);
        assert!(s.contains("caused by: reading pysetup.toml"));
        assert!(s.contains("caused by: expected a table"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading config"));
    }
}
