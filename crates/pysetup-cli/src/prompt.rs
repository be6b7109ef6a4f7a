//! Interactive prompts for `init`.
//!
//! Every method returns `Ok(None)` when the session is not interactive, so
//! callers fall through to config and preset defaults without branching on
//! the `interactive` feature themselves.

use std::io::IsTerminal as _;

use crate::error::CliResult;

/// Asks the user for values when stdin is a terminal and `--yes` was not given.
#[derive(Debug, Clone, Copy)]
pub struct Prompter {
    enabled: bool,
}

impl Prompter {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            enabled: cfg!(feature = "interactive")
                && !assume_yes
                && std::io::stdin().is_terminal(),
        }
    }

    /// A prompter that never asks.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.enabled
    }

    /// Free-text question pre-filled with `default`. An empty answer is
    /// returned as an empty string.
    pub fn text(&self, prompt: &str, default: Option<&str>) -> CliResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }
        imp::text(prompt, default).map(Some)
    }

    /// Pick one of `items`; returns the chosen index.
    pub fn select(&self, prompt: &str, items: &[String], default: usize) -> CliResult<Option<usize>> {
        if !self.enabled || items.is_empty() {
            return Ok(None);
        }
        imp::select(prompt, items, default.min(items.len() - 1)).map(Some)
    }

    /// Yes/no question.
    pub fn confirm(&self, prompt: &str, default: bool) -> CliResult<Option<bool>> {
        if !self.enabled {
            return Ok(None);
        }
        imp::confirm(prompt, default).map(Some)
    }
}

#[cfg(feature = "interactive")]
mod imp {
    use dialoguer::{Confirm, Input, Select};

    use crate::error::{CliError, CliResult};

    pub(super) fn text(prompt: &str, default: Option<&str>) -> CliResult<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_owned());
        }
        input.interact_text().map_err(map_prompt_error)
    }

    pub(super) fn select(prompt: &str, items: &[String], default: usize) -> CliResult<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(map_prompt_error)
    }

    pub(super) fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(map_prompt_error)
    }

    fn map_prompt_error(err: dialoguer::Error) -> CliError {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                CliError::Cancelled
            }
            other => CliError::Prompt {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use crate::error::{CliError, CliResult};

    fn unavailable() -> CliError {
        CliError::FeatureNotAvailable {
            feature: "interactive",
        }
    }

    pub(super) fn text(_prompt: &str, _default: Option<&str>) -> CliResult<String> {
        Err(unavailable())
    }

    pub(super) fn select(_prompt: &str, _items: &[String], _default: usize) -> CliResult<usize> {
        Err(unavailable())
    }

    pub(super) fn confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
        Err(unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_prompter_never_asks() {
        let prompter = Prompter::disabled();
        assert!(!prompter.is_interactive());
        assert_eq!(prompter.text("Project name", Some("demo")).unwrap(), None);
        assert_eq!(prompter.confirm("Overwrite?", false).unwrap(), None);
        assert_eq!(
            prompter
                .select("Preset", &["library".to_string()], 0)
                .unwrap(),
            None
        );
    }

    #[test]
    fn assume_yes_disables_prompts() {
        assert!(!Prompter::new(true).is_interactive());
    }
}
