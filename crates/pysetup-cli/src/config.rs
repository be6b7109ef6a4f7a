//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`PYSETUP_DEFAULTS__PRESET=library`)
//! 3. Config file (`--config FILE`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every key accepted by `config get` / `config set`.
pub const KEYS: &[&str] = &[
    "defaults.preset",
    "defaults.python",
    "defaults.package_path",
    "defaults.author_name",
    "defaults.author_email",
    "defaults.workflow",
    "defaults.style_config",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for `init`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    pub workflow: bool,
    pub style_config: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            preset: None,
            python: None,
            package_path: None,
            author_name: None,
            author_email: None,
            workflow: true,
            style_config: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("defaults.workflow", defaults.defaults.workflow)?
            .set_default("defaults.style_config", defaults.defaults.style_config)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("PYSETUP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Read only the file layer, for `config set` round-trips.
    pub fn read_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write this configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Current value of a dotted key; `None` for unknown keys.
    ///
    /// Unset optional keys render as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let d = &self.defaults;
        let value = match key {
            "defaults.preset" => d.preset.clone().unwrap_or_default(),
            "defaults.python" => d.python.clone().unwrap_or_default(),
            "defaults.package_path" => d.package_path.clone().unwrap_or_default(),
            "defaults.author_name" => d.author_name.clone().unwrap_or_default(),
            "defaults.author_email" => d.author_email.clone().unwrap_or_default(),
            "defaults.workflow" => d.workflow.to_string(),
            "defaults.style_config" => d.style_config.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a dotted key. An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let optional = || {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        let flag = || {
            value
                .trim()
                .parse::<bool>()
                .map_err(|_| format!("'{key}' expects true or false, got '{value}'"))
        };

        let d = &mut self.defaults;
        match key {
            "defaults.preset" => d.preset = optional(),
            "defaults.python" => d.python = optional(),
            "defaults.package_path" => d.package_path = optional(),
            "defaults.author_name" => d.author_name = optional(),
            "defaults.author_email" => d.author_email = optional(),
            "defaults.workflow" => d.workflow = flag()?,
            "defaults.style_config" => d.style_config = flag()?,
            "output.no_color" => self.output.no_color = flag()?,
            "output.format" => match value.trim() {
                "auto" | "human" | "plain" | "json" => self.output.format = value.trim().into(),
                other => return Err(format!("unknown output format '{other}'")),
            },
            _ => return Err(format!("unknown key '{key}'")),
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pyproject-setup.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "pyproject-setup", "pyproject-setup")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pyproject-setup.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_workflow_only() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.workflow);
        assert!(!cfg.defaults.style_config);
        assert!(cfg.defaults.preset.is_none());
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\npreset = \"library\"\nworkflow = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.preset.as_deref(), Some("library"));
        assert!(!cfg.defaults.workflow);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut cfg = AppConfig::default();
        cfg.set("defaults.author_name", "Ada Lovelace").unwrap();
        cfg.set("defaults.style_config", "true").unwrap();
        assert_eq!(cfg.get("defaults.author_name").as_deref(), Some("Ada Lovelace"));
        assert_eq!(cfg.get("defaults.style_config").as_deref(), Some("true"));

        cfg.set("defaults.author_name", "").unwrap();
        assert_eq!(cfg.get("defaults.author_name").as_deref(), Some(""));
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_bool() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set("templates.url", "x").is_err());
        assert!(cfg.set("defaults.workflow", "maybe").is_err());
        assert!(cfg.set("output.format", "yaml").is_err());
    }

    #[test]
    fn every_listed_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(cfg.get(key).is_some(), "{key} should be readable");
        }
    }

    #[test]
    fn save_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let mut cfg = AppConfig::default();
        cfg.set("defaults.preset", "cli-tool").unwrap();
        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::read_file(&path).unwrap(), cfg);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
