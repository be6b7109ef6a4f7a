//! Integration tests for pysetup-core public API.

use pysetup_core::domain::{
    ConfigValue, ProjectSpec, RenderContext, manifest, registry, value::get_path,
};

fn dependencies(doc: &pysetup_core::domain::ConfigTable) -> Vec<String> {
    get_path(doc, &["project", "dependencies"])
        .and_then(ConfigValue::as_array)
        .unwrap_or_default()
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

#[test]
fn every_preset_keeps_its_dependencies_under_overrides() {
    for name in registry::list_names() {
        let preset = registry::lookup(name).unwrap();
        let spec = ProjectSpec::builder()
            .name("demo")
            .dependency("httpx>=0.28")
            .dependency(preset.dependencies.first().copied().unwrap_or("attrs"))
            .build(preset)
            .unwrap();

        let doc = manifest::compose(preset, &spec, &RenderContext::for_spec(&spec));
        let deps = dependencies(&doc);

        for declared in preset.dependencies {
            assert!(deps.iter().any(|d| d == declared), "{name} lost {declared}");
        }
        assert_eq!(
            &deps[..preset.dependencies.len()],
            preset.dependencies,
            "{name}: preset order must come first"
        );
        assert!(deps.iter().any(|d| d == "httpx>=0.28"));

        let mut unique = deps.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), deps.len(), "{name}: duplicates in {deps:?}");
    }
}

#[test]
fn compose_is_deterministic() {
    let preset = registry::lookup("fastapi-backend").unwrap();
    let spec = ProjectSpec::builder()
        .name("api")
        .package_path("src/api")
        .repository("https://github.com/me/api")
        .author("Ada", "ada@example.com")
        .build(preset)
        .unwrap();
    let ctx = RenderContext::for_spec(&spec);

    let first = manifest::compose(preset, &spec, &ctx);
    let second = manifest::compose(preset, &spec, &ctx);
    assert_eq!(first, second);
    assert!(
        first.keys().eq(second.keys()),
        "top-level key order must be stable"
    );
}

#[test]
fn no_placeholder_survives_composition() {
    for name in registry::list_names() {
        let preset = registry::lookup(name).unwrap();
        let spec = ProjectSpec::builder().name("demo").build(preset).unwrap();
        let doc = manifest::compose(preset, &spec, &RenderContext::for_spec(&spec));
        let text = format!("{doc:?}");
        assert!(!text.contains("{{"), "{name} left a placeholder");
    }
}
