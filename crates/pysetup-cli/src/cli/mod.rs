//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;

pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyproject-setup",
    bin_name = "pyproject-setup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold pyproject.toml with pre-configured linting and tooling",
    long_about = "pyproject-setup writes a pyproject.toml from a preset \
                  (fastapi-backend, library, cli-tool), with ruff, mypy, pylint, \
                  pytest, coverage and ty already configured, plus an optional \
                  GitHub Actions publish workflow.",
    after_help = "EXAMPLES:\n\
        \x20 pyproject-setup init\n\
        \x20 pyproject-setup init -p library -n mylib --no-workflow --yes\n\
        \x20 pyproject-setup list --format json\n\
        \x20 pyproject-setup completions bash > /usr/share/bash-completion/completions/pyproject-setup",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate pyproject.toml (and optionally a publish workflow).
    #[command(
        about = "Generate pyproject.toml from a preset",
        after_help = "EXAMPLES:\n\
            \x20 pyproject-setup init                       # prompts for everything\n\
            \x20 pyproject-setup init -p cli-tool -n mytool --yes\n\
            \x20 pyproject-setup init -p library -n mylib --python '>=3.11' --dry-run\n\
            \x20 pyproject-setup init -n api -r https://github.com/me/api --author 'Ada' --email ada@example.com"
    )]
    Init(InitArgs),

    /// List available presets.
    #[command(
        visible_alias = "ls",
        about = "List available presets",
        after_help = "EXAMPLES:\n\
            \x20 pyproject-setup list\n\
            \x20 pyproject-setup list --format csv"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyproject-setup completions bash > ~/.local/share/bash-completion/completions/pyproject-setup\n\
            \x20 pyproject-setup completions zsh  > ~/.zfunc/_pyproject-setup\n\
            \x20 pyproject-setup completions fish > ~/.config/fish/completions/pyproject-setup.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyproject-setup config init\n\
            \x20 pyproject-setup config get defaults.preset\n\
            \x20 pyproject-setup config set defaults.author_name 'Ada Lovelace'\n\
            \x20 pyproject-setup config list"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyproject-setup init`.
///
/// Every project field is optional: a missing value is prompted for in an
/// interactive session, otherwise it falls back to config, then preset, then
/// built-in defaults.
#[derive(Debug, Default, Args)]
pub struct InitArgs {
    /// Preset to start from.
    #[arg(short = 'p', long = "preset", value_name = "PRESET", help = "Preset name (see `list`)")]
    pub preset: Option<String>,

    /// Project (distribution) name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(short = 'd', long = "description", value_name = "TEXT", help = "One-line description")]
    pub description: Option<String>,

    /// requires-python constraint, e.g. `>=3.12`.
    #[arg(long = "python", value_name = "CONSTRAINT", help = "Python version constraint")]
    pub python: Option<String>,

    /// Package directory, e.g. `src` or `src/mypkg`.
    #[arg(long = "package-path", value_name = "PATH", help = "Package directory")]
    pub package_path: Option<String>,

    #[arg(long = "version", value_name = "VERSION", help = "Initial project version")]
    pub version: Option<String>,

    #[arg(short = 'r', long = "repository", value_name = "URL", help = "Repository URL")]
    pub repository: Option<String>,

    #[arg(long = "homepage", value_name = "URL", help = "Homepage URL")]
    pub homepage: Option<String>,

    #[arg(long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    #[arg(long = "email", value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,

    /// Extra runtime dependency (repeatable).
    #[arg(long = "dep", value_name = "REQUIREMENT", help = "Add a runtime dependency")]
    pub deps: Vec<String>,

    /// Extra dev dependency (repeatable).
    #[arg(long = "dev-dep", value_name = "REQUIREMENT", help = "Add a dev dependency")]
    pub dev_deps: Vec<String>,

    #[arg(long = "no-workflow", help = "Skip the GitHub Actions publish workflow")]
    pub no_workflow: bool,

    #[arg(long = "yapf", help = "Also write a .style.yapf file")]
    pub yapf: bool,

    /// Directory to write into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output: PathBuf,

    /// Overwrite existing files without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Never prompt; use flags and defaults only.
    #[arg(short = 'y', long = "yes", help = "Non-interactive: accept defaults")]
    pub yes: bool,

    /// Print the generated files instead of writing them.
    #[arg(long = "dry-run", help = "Show generated files without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyproject-setup list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyproject-setup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pyproject-setup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.preset`.
        key: String,
    },

    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },

    /// Print all configuration values.
    List,

    /// Print the path to the active configuration file.
    Path,

    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_with_repeatable_deps() {
        let cli = Cli::parse_from([
            "pyproject-setup",
            "init",
            "-p",
            "library",
            "-n",
            "mylib",
            "--dep",
            "httpx",
            "--dep",
            "attrs",
            "--dev-dep",
            "hypothesis",
            "--no-workflow",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.preset.as_deref(), Some("library"));
        assert_eq!(args.deps, ["httpx", "attrs"]);
        assert_eq!(args.dev_deps, ["hypothesis"]);
        assert!(args.no_workflow);
        assert_eq!(args.output, PathBuf::from("."));
    }

    #[test]
    fn ls_is_alias_for_list() {
        let cli = Cli::parse_from(["pyproject-setup", "ls", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::List(ListArgs {
                format: ListFormat::Json
            })
        ));
    }

    #[test]
    fn config_init_takes_force() {
        let cli = Cli::parse_from(["pyproject-setup", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn no_color_flag_without_value() {
        let cli = Cli::parse_from(["pyproject-setup", "--no-color", "list"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["pyproject-setup", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
