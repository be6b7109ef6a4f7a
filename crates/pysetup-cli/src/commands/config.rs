//! `pyproject-setup config`: read and write configuration values.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, KEYS},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` override, if any; `get` and `list` read
/// the merged `config`, `set` and `init` touch only the file.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value:?} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            for key in KEYS {
                let value = config.get(key).unwrap_or_default();
                output.print(&format!("  {key} = {value:?}"))?;
            }
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
                return Ok(());
            }
            AppConfig::default()
                .save(&path)
                .map_err(|e| config_error("Failed to write default config", e))?;
            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let mut file_config = AppConfig::read_file(path)
        .map_err(|e| config_error("Failed to read config file", e))?;
    file_config.set(key, value).map_err(|message| CliError::ConfigError {
        message,
        source: None,
    })?;
    file_config
        .save(path)
        .map_err(|e| config_error("Failed to write config file", e))
}

fn config_error(message: &str, err: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{message}: {err}"),
        source: Some(err.into()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
