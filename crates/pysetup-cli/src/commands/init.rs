//! `pyproject-setup init`: generate pyproject.toml for the current project.
//!
//! Value resolution per field: flag, then prompt (interactive sessions only),
//! then `[defaults]` from config, then the preset, then the global default.
//! The last two steps happen inside [`ProjectInput::build`].

use std::path::Path;

use tracing::{debug, info, instrument};

use pysetup_adapters::{LocalFilesystem, TomlSerializer};
use pysetup_core::{
    application::{ApplicationError, PresetService, ScaffoldService},
    domain::{MANIFEST_PATH, Preset, ProjectInput, ProjectSpec, RenderedDocument, registry},
    error::SetupError,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::Prompter,
};

#[instrument(skip_all, fields(output = %args.output.display(), dry_run = args.dry_run))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = Prompter::new(args.yes);
    debug!(interactive = prompter.is_interactive(), verbose = global.verbose, "Starting init");

    let overwrite = if args.dry_run {
        false
    } else {
        confirm_overwrite(&args, &prompter, &output)?
    };

    let collected = collect(&args, &config, &prompter)?;
    let preset = collected.preset;
    let spec = collected.input.build(preset).map_err(SetupError::from)?;
    info!(preset = preset.name, project = %spec.name, "Resolved project");

    let service = ScaffoldService::new(
        Box::new(TomlSerializer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let document = service.render(preset, &spec)?;
        return print_documents(&document, &output);
    }

    let spinner = output.spinner("Generating pyproject.toml...");
    let result = service.scaffold(preset, &spec, &args.output, overwrite);
    spinner.finish_and_clear();
    let report = result?;

    for path in &report.written {
        output.success(&format!("Created {}", path.display()))?;
    }
    print_next_steps(&spec, &output)?;

    Ok(())
}

/// Whether existing files may be replaced.
///
/// An existing pyproject.toml needs `--force` or an interactive yes; a
/// non-interactive run without `--force` fails before anything is asked.
fn confirm_overwrite(args: &InitArgs, prompter: &Prompter, output: &OutputManager) -> CliResult<bool> {
    if args.force {
        return Ok(true);
    }

    let manifest = args.output.join(MANIFEST_PATH);
    if !manifest.exists() {
        return Ok(false);
    }

    let question = format!(
        "pyproject.toml already exists at {}. Overwrite?",
        args.output.display()
    );
    match prompter.confirm(&question, false)? {
        Some(true) => Ok(true),
        Some(false) => {
            output.error("Aborted.")?;
            Err(CliError::Cancelled)
        }
        None => Err(SetupError::from(ApplicationError::OutputExists { path: manifest }).into()),
    }
}

struct Collected {
    preset: &'static Preset,
    input: ProjectInput,
}

fn collect(args: &InitArgs, config: &AppConfig, prompter: &Prompter) -> CliResult<Collected> {
    let defaults = &config.defaults;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => {
            let fallback = directory_name(&args.output);
            match prompter.text("Project name", fallback.as_deref())? {
                Some(answer) => answer,
                None => fallback.ok_or_else(|| {
                    CliError::invalid_input(format!(
                        "cannot derive a project name from '{}'; pass --name",
                        args.output.display()
                    ))
                })?,
            }
        }
    };

    let description = match &args.description {
        Some(description) => Some(description.clone()),
        None => prompter.text("Description", Some(""))?,
    };

    let preset = resolve_preset(args.preset.as_deref(), defaults.preset.as_deref(), prompter)?;

    let python_version = ask(
        prompter,
        "Python version",
        args.python.as_deref(),
        defaults.python.as_deref(),
        preset.python_version(),
    )?;
    let package_path = ask(
        prompter,
        "Package path",
        args.package_path.as_deref(),
        defaults.package_path.as_deref(),
        preset.package_path(),
    )?;

    let workflow = if args.no_workflow {
        false
    } else {
        prompter
            .confirm("Add PyPI publish workflow?", defaults.workflow)?
            .unwrap_or(defaults.workflow)
    };

    let style_config = if args.yapf {
        true
    } else {
        prompter
            .confirm("Add .style.yapf config?", defaults.style_config)?
            .unwrap_or(defaults.style_config)
    };

    let repository = optional(prompter, "Repository URL (optional)", args.repository.as_deref())?;
    let homepage = optional(prompter, "Homepage URL (optional)", args.homepage.as_deref())?;

    let input = ProjectInput {
        name: Some(name),
        description,
        version: args.version.clone(),
        python_version,
        package_path,
        workflow: Some(workflow),
        style_config: Some(style_config),
        homepage,
        repository,
        author_name: args.author.clone().or_else(|| defaults.author_name.clone()),
        author_email: args.email.clone().or_else(|| defaults.author_email.clone()),
        dependencies: args.deps.clone(),
        dev_dependencies: args.dev_deps.clone(),
    };

    Ok(Collected { preset, input })
}

/// Flag, then interactive choice, then configured default, then the first
/// registry entry.
fn resolve_preset(
    flag: Option<&str>,
    configured: Option<&str>,
    prompter: &Prompter,
) -> CliResult<&'static Preset> {
    let service = PresetService::new();
    if let Some(name) = flag {
        return Ok(service.get(name)?);
    }

    let configured = configured.map(|name| service.get(name)).transpose()?;
    let presets = service.list();
    let items: Vec<String> = presets
        .iter()
        .map(|info| format!("{} - {}", info.name, info.description))
        .collect();
    let default_index = configured
        .and_then(|preset| presets.iter().position(|info| info.name == preset.name))
        .unwrap_or(0);

    match prompter.select("Select preset", &items, default_index)? {
        Some(index) => Ok(service.get(&presets[index].name)?),
        None => Ok(configured.unwrap_or_else(registry::default_preset)),
    }
}

/// Flag wins; otherwise prompt pre-filled with the configured or preset value;
/// otherwise the configured value (`None` leaves the preset default).
fn ask(
    prompter: &Prompter,
    question: &str,
    flag: Option<&str>,
    configured: Option<&str>,
    preset_default: &str,
) -> CliResult<Option<String>> {
    if let Some(value) = flag {
        return Ok(Some(value.to_owned()));
    }
    let shown = configured.unwrap_or(preset_default);
    Ok(prompter
        .text(question, Some(shown))?
        .or_else(|| configured.map(str::to_owned)))
}

/// Optional URL: an empty answer means "none".
fn optional(prompter: &Prompter, question: &str, flag: Option<&str>) -> CliResult<Option<String>> {
    if let Some(value) = flag {
        return Ok(Some(value.to_owned()));
    }
    Ok(prompter
        .text(question, Some(""))?
        .filter(|answer| !answer.trim().is_empty()))
}

/// Final component of `dir` once made absolute.
fn directory_name(dir: &Path) -> Option<String> {
    let absolute = std::path::absolute(dir).ok()?;
    absolute.file_name()?.to_str().map(str::to_owned)
}

fn print_documents(document: &RenderedDocument, output: &OutputManager) -> CliResult<()> {
    for file in document.files() {
        output.header(&format!("# {}", file.path))?;
        output.document(file.content)?;
    }
    output.info("Dry run: nothing was written")?;
    Ok(())
}

fn print_next_steps(spec: &ProjectSpec, output: &OutputManager) -> CliResult<()> {
    if output.is_quiet() {
        return Ok(());
    }
    output.print("")?;
    output.success(&format!("Done! Project {} initialized.", spec.name))?;
    output.print("")?;
    output.header("Next steps:")?;
    output.print(&format!("  1. Create {}/ directory", spec.package_path))?;
    output.print("  2. pip install -e \".[dev]\"")?;
    output.print("  3. Start coding!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn directory_name_of_nested_path() {
        assert_eq!(
            directory_name(Path::new("/tmp/projects/mylib")).as_deref(),
            Some("mylib")
        );
        assert_eq!(
            directory_name(Path::new("/tmp/projects/mylib/.")).as_deref(),
            Some("mylib")
        );
    }

    #[test]
    fn root_has_no_directory_name() {
        assert_eq!(directory_name(Path::new("/")), None);
    }

    #[test]
    fn flag_preset_beats_configured() {
        let preset = resolve_preset(Some("cli-tool"), Some("library"), &Prompter::disabled()).unwrap();
        assert_eq!(preset.name, "cli-tool");
    }

    #[test]
    fn configured_preset_beats_registry_default() {
        let preset = resolve_preset(None, Some("library"), &Prompter::disabled()).unwrap();
        assert_eq!(preset.name, "library");

        let preset = resolve_preset(None, None, &Prompter::disabled()).unwrap();
        assert_eq!(preset.name, "fastapi-backend");
    }

    #[test]
    fn unknown_preset_exits_not_found() {
        let err = resolve_preset(Some("django"), None, &Prompter::disabled()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn ask_prefers_flag_then_config() {
        let prompter = Prompter::disabled();
        assert_eq!(
            ask(&prompter, "Python", Some(">=3.11"), Some(">=3.13"), ">=3.12").unwrap(),
            Some(">=3.11".into())
        );
        assert_eq!(
            ask(&prompter, "Python", None, Some(">=3.13"), ">=3.12").unwrap(),
            Some(">=3.13".into())
        );
        assert_eq!(ask(&prompter, "Python", None, None, ">=3.12").unwrap(), None);
    }

    #[test]
    fn collect_without_prompts_uses_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.author_name = Some("Ada".into());
        config.defaults.author_email = Some("ada@example.com".into());
        config.defaults.workflow = false;

        let args = InitArgs {
            name: Some("mylib".into()),
            preset: Some("library".into()),
            yapf: true,
            output: PathBuf::from("."),
            ..InitArgs::default()
        };

        let collected = collect(&args, &config, &Prompter::disabled()).unwrap();
        assert_eq!(collected.preset.name, "library");

        let spec = collected.input.build(collected.preset).unwrap();
        assert_eq!(spec.name, "mylib");
        assert!(!spec.workflow);
        assert!(spec.style_config);
        assert_eq!(spec.author.map(|a| a.email).as_deref(), Some("ada@example.com"));
    }
}
