//! Implementation of the `pyproject-setup list` command.

use pysetup_core::application::{ApplicationError, PresetInfo, PresetService};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let presets = PresetService::new().list();

    // `--output-format json` upgrades the default table.
    let format = match (args.format, output.format()) {
        (ListFormat::Table, OutputFormat::Json) => ListFormat::Json,
        (format, _) => format,
    };

    match format {
        ListFormat::Table => {
            output.header("Available presets:")?;
            for preset in &presets {
                output.print(&table_row(preset))?;
            }
            output.print("")?;
            output.info("Use: pyproject-setup init --preset <NAME>")?;
        }

        ListFormat::List => {
            for preset in &presets {
                output.print(&preset.name)?;
            }
        }

        // JSON goes straight to stdout so it stays parseable in pipes.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&presets).map_err(|e| {
                CliError::from(pysetup_core::error::SetupError::from(
                    ApplicationError::SerializationFailed {
                        reason: e.to_string(),
                    },
                ))
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,description,dependencies,dev_dependencies,entry_point");
            for preset in &presets {
                println!("{}", csv_row(preset));
            }
        }
    }

    Ok(())
}

fn table_row(preset: &PresetInfo) -> String {
    let entry = preset
        .entry_point
        .as_deref()
        .map(|entry| format!(", entry {entry}"))
        .unwrap_or_default();
    format!(
        "  {:<16} {} ({} deps, {} dev{})",
        preset.name, preset.description, preset.dependencies, preset.dev_dependencies, entry
    )
}

fn csv_row(preset: &PresetInfo) -> String {
    format!(
        "{},{},{},{},{}",
        preset.name,
        csv_field(&preset.description),
        preset.dependencies,
        preset.dev_dependencies,
        preset.entry_point.as_deref().unwrap_or_default()
    )
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
