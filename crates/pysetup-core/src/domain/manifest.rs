//! Build the `pyproject.toml` structure.
//!
//! The preset side and the spec side are built as separate tables and combined
//! with [`deep_merge`], so preset-declared list entries always survive and spec
//! scalars always win.

use crate::domain::{
    ConfigTable, ConfigValue, Preset, ProjectSpec, RenderContext,
    value::{deep_merge, strings, substitute_table, table},
};

/// Preset defaults as a document, placeholders unresolved.
pub fn preset_document(preset: &Preset) -> ConfigTable {
    let mut project = table([
        ("name", ConfigValue::from("{{PROJECT_NAME}}")),
        ("version", preset.version().into()),
        ("description", preset.default_description().into()),
        ("requires-python", preset.python_version().into()),
        ("dependencies", strings(preset.dependencies)),
    ]);

    if !preset.dev_dependencies.is_empty() {
        project.insert(
            "optional-dependencies".into(),
            ConfigValue::Table(table([("dev", strings(preset.dev_dependencies))])),
        );
    }

    if let Some(entry_point) = preset.entry_point {
        project.insert(
            "scripts".into(),
            ConfigValue::Table(table([(
                "{{PROJECT_NAME}}",
                ConfigValue::from(format!("{{{{PACKAGE_MODULE}}}}.{entry_point}")),
            )])),
        );
    }

    table([
        ("project", ConfigValue::Table(project)),
        (
            "build-system",
            ConfigValue::Table(table([
                ("requires", strings(&["hatchling"])),
                ("build-backend", "hatchling.build".into()),
            ])),
        ),
        ("tool", ConfigValue::Table(preset.tool_config())),
    ])
}

/// The user-resolved fields as an overlay document.
pub fn spec_document(spec: &ProjectSpec) -> ConfigTable {
    let mut project = table([
        ("name", ConfigValue::from(spec.name.as_str())),
        ("version", spec.version.as_str().into()),
        ("description", spec.description.as_str().into()),
        ("requires-python", spec.python_version.as_str().into()),
        ("dependencies", strings(&spec.extra_dependencies)),
    ]);

    if !spec.extra_dev_dependencies.is_empty() {
        project.insert(
            "optional-dependencies".into(),
            ConfigValue::Table(table([("dev", strings(&spec.extra_dev_dependencies))])),
        );
    }

    let urls = project_urls(spec);
    if !urls.is_empty() {
        project.insert("urls".into(), ConfigValue::Table(urls));
    }

    if let Some(author) = &spec.author {
        project.insert(
            "authors".into(),
            ConfigValue::Array(vec![ConfigValue::Table(table([
                ("name", ConfigValue::from(author.name.as_str())),
                ("email", author.email.as_str().into()),
            ]))]),
        );
    }

    table([("project", ConfigValue::Table(project))])
}

fn project_urls(spec: &ProjectSpec) -> ConfigTable {
    let mut urls = ConfigTable::new();
    if let Some(homepage) = &spec.homepage {
        urls.insert("Homepage".into(), homepage.as_str().into());
    }
    if let Some(repo) = &spec.repository {
        urls.insert("Repository".into(), repo.as_str().into());
        urls.insert("Issues".into(), format!("{repo}/issues").into());
        urls.insert(
            "Changelog".into(),
            format!("{repo}/blob/main/CHANGELOG.md").into(),
        );
    }
    urls
}

/// Substitute the preset side, then overlay the spec.
pub fn compose(preset: &Preset, spec: &ProjectSpec, ctx: &RenderContext) -> ConfigTable {
    let base = substitute_table(&preset_document(preset), ctx);
    deep_merge(&base, &spec_document(spec))
}
