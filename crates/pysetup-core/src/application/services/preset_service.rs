//! Preset Service - read-only queries over the registry.

use serde::Serialize;

use crate::{
    domain::{Preset, registry},
    error::SetupResult,
};

/// Information about a preset for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    pub name: String,
    pub description: String,
    pub dependencies: usize,
    pub dev_dependencies: usize,
    pub entry_point: Option<String>,
}

impl From<&Preset> for PresetInfo {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name.to_string(),
            description: preset.description.to_string(),
            dependencies: preset.dependencies.len(),
            dev_dependencies: preset.dev_dependencies.len(),
            entry_point: preset.entry_point.map(str::to_string),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PresetService;

impl PresetService {
    pub fn new() -> Self {
        Self
    }

    /// All presets, in registry order.
    pub fn list(&self) -> Vec<PresetInfo> {
        registry::PRESET_REGISTRY.iter().map(PresetInfo::from).collect()
    }

    pub fn get(&self, name: &str) -> SetupResult<&'static Preset> {
        Ok(registry::lookup(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn list_follows_registry_order() {
        let names: Vec<_> = PresetService::new()
            .list()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(names, ["fastapi-backend", "library", "cli-tool"]);
    }

    #[test]
    fn info_counts_dependencies() {
        let cli = PresetService::new()
            .list()
            .into_iter()
            .find(|info| info.name == "cli-tool")
            .unwrap();
        assert_eq!(cli.dependencies, 2);
        assert_eq!(cli.dev_dependencies, 7);
        assert_eq!(cli.entry_point.as_deref(), Some("main:app"));
    }

    #[test]
    fn get_unknown_is_not_found() {
        let err = PresetService::new().get("flask").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
