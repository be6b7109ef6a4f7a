use std::fmt;

use crate::domain::ConfigTable;

/// Global fallback for `requires-python`.
pub const DEFAULT_PYTHON_VERSION: &str = ">=3.12";
/// Global fallback for the package directory.
pub const DEFAULT_PACKAGE_PATH: &str = "src";
/// Global fallback for the project version.
pub const DEFAULT_VERSION: &str = "0.1.0";
/// Global fallback for the project description.
pub const DEFAULT_DESCRIPTION: &str = "Add your description here";

/// An immutable, named project template.
///
/// Presets are compile-time data (see [`crate::domain::registry`]). Identity is
/// the name; two presets with the same name are the same preset.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub defaults: PresetDefaults,
    pub dependencies: &'static [&'static str],
    pub dev_dependencies: &'static [&'static str],
    /// `module:attr` console entry point, relative to the package module.
    pub entry_point: Option<&'static str>,
    /// Builds the `[tool.*]` blocks, with `{{PLACEHOLDER}}` strings unresolved.
    pub tools: fn() -> ConfigTable,
}

impl Preset {
    pub fn tool_config(&self) -> ConfigTable {
        (self.tools)()
    }

    pub fn python_version(&self) -> &'static str {
        self.defaults.python_version.unwrap_or(DEFAULT_PYTHON_VERSION)
    }

    pub fn package_path(&self) -> &'static str {
        self.defaults.package_path.unwrap_or(DEFAULT_PACKAGE_PATH)
    }

    pub fn version(&self) -> &'static str {
        self.defaults.version.unwrap_or(DEFAULT_VERSION)
    }

    pub fn default_description(&self) -> &'static str {
        self.defaults.description.unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn has_dev_dependency(&self, package: &str) -> bool {
        self.dev_dependencies
            .iter()
            .any(|dep| requirement_name(dep).eq_ignore_ascii_case(package))
    }
}

impl PartialEq for Preset {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Preset {}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Per-preset fallbacks for project fields. `None` defers to the global default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetDefaults {
    pub python_version: Option<&'static str>,
    pub package_path: Option<&'static str>,
    pub description: Option<&'static str>,
    pub version: Option<&'static str>,
}

impl PresetDefaults {
    pub const fn none() -> Self {
        Self {
            python_version: None,
            package_path: None,
            description: None,
            version: None,
        }
    }
}

/// Distribution name of a PEP 508 requirement (`uvicorn[standard]>=0.38` → `uvicorn`).
pub fn requirement_name(requirement: &str) -> &str {
    let end = requirement
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(requirement.len());
    requirement[..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_name_strips_extras_and_specifiers() {
        assert_eq!(requirement_name("uvicorn[standard]>=0.38.0,<0.39.0"), "uvicorn");
        assert_eq!(requirement_name("pytest>=9.0.2,<10.0.0"), "pytest");
        assert_eq!(requirement_name("pytest-cov"), "pytest-cov");
        assert_eq!(requirement_name("types-redis>=4.6"), "types-redis");
    }

    #[test]
    fn defaults_fall_back_to_globals() {
        let preset = Preset {
            name: "bare",
            description: "",
            defaults: PresetDefaults::none(),
            dependencies: &[],
            dev_dependencies: &["pytest>=9"],
            entry_point: None,
            tools: ConfigTable::new,
        };
        assert_eq!(preset.python_version(), DEFAULT_PYTHON_VERSION);
        assert_eq!(preset.package_path(), DEFAULT_PACKAGE_PATH);
        assert_eq!(preset.version(), DEFAULT_VERSION);
        assert!(preset.has_dev_dependency("pytest"));
        assert!(!preset.has_dev_dependency("pytest-cov"));
    }
}
