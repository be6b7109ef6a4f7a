//! Opaque configuration values and the deep-merge over them.
//!
//! Tool blocks, the `[project]` table and `[build-system]` are all expressed
//! as a [`ConfigTable`]. Tables are insertion ordered so the serialized
//! document follows declaration order, then merge order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::RenderContext;

/// Ordered string-keyed table of configuration values.
pub type ConfigTable = IndexMap<String, ConfigValue>;

/// A single configuration value.
///
/// Serialized untagged, so a `ConfigValue::String` becomes a plain TOML string,
/// a `ConfigValue::Table` becomes a TOML table, and so on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Array(Vec<ConfigValue>),
    Table(ConfigTable),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&ConfigTable> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Replace `{{VARIABLE}}` placeholders in every string and table key.
    pub fn substitute(&self, ctx: &RenderContext) -> ConfigValue {
        match self {
            Self::String(s) => Self::String(ctx.render(s)),
            Self::Array(items) => Self::Array(items.iter().map(|v| v.substitute(ctx)).collect()),
            Self::Table(table) => Self::Table(substitute_table(table, ctx)),
            Self::Integer(_) | Self::Boolean(_) => self.clone(),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<ConfigTable> for ConfigValue {
    fn from(value: ConfigTable) -> Self {
        Self::Table(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        Self::Array(value)
    }
}

/// Build a table from `(key, value)` pairs, keeping their order.
pub fn table<K, I>(entries: I) -> ConfigTable
where
    K: Into<String>,
    I: IntoIterator<Item = (K, ConfigValue)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Array of plain strings.
pub fn strings<S: AsRef<str>>(items: &[S]) -> ConfigValue {
    ConfigValue::Array(items.iter().map(|s| ConfigValue::from(s.as_ref())).collect())
}

/// Apply [`ConfigValue::substitute`] to every key and value of a table.
pub fn substitute_table(table: &ConfigTable, ctx: &RenderContext) -> ConfigTable {
    table
        .iter()
        .map(|(key, value)| (ctx.render(key), value.substitute(ctx)))
        .collect()
}

/// Walk nested tables by key path.
pub fn get_path<'a>(table: &'a ConfigTable, path: &[&str]) -> Option<&'a ConfigValue> {
    let (first, rest) = path.split_first()?;
    let value = table.get(*first)?;
    if rest.is_empty() {
        Some(value)
    } else {
        get_path(value.as_table()?, rest)
    }
}

/// Merge `overlay` onto `base`.
///
/// - tables merge recursively
/// - arrays are unioned: every `base` item in order, then `overlay` items not
///   already present (exact equality)
/// - anything else: `overlay` wins
///
/// Keys keep their position from `base`; keys only in `overlay` are appended.
pub fn deep_merge(base: &ConfigTable, overlay: &ConfigTable) -> ConfigTable {
    let mut merged = base.clone();
    for (key, value) in overlay {
        let next = match merged.get(key) {
            Some(existing) => merge_value(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

fn merge_value(base: &ConfigValue, overlay: &ConfigValue) -> ConfigValue {
    match (base, overlay) {
        (ConfigValue::Table(b), ConfigValue::Table(o)) => ConfigValue::Table(deep_merge(b, o)),
        (ConfigValue::Array(b), ConfigValue::Array(o)) => ConfigValue::Array(union(b, o)),
        (_, o) => o.clone(),
    }
}

fn union(base: &[ConfigValue], overlay: &[ConfigValue]) -> Vec<ConfigValue> {
    let mut out: Vec<ConfigValue> = Vec::with_capacity(base.len() + overlay.len());
    for item in base.iter().chain(overlay) {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> ConfigValue {
        ConfigValue::from(v)
    }

    #[test]
    fn scalar_override_wins() {
        let base = table([("requires-python", s(">=3.11"))]);
        let overlay = table([("requires-python", s(">=3.12"))]);
        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["requires-python"], s(">=3.12"));
    }

    #[test]
    fn arrays_union_in_base_order() {
        let base = table([("deps", strings(&["a", "b"]))]);
        let overlay = table([("deps", strings(&["c", "a"]))]);
        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["deps"], strings(&["a", "b", "c"]));
    }

    #[test]
    fn empty_overlay_array_keeps_base() {
        let base = table([("deps", strings(&["a"]))]);
        let overlay = table([("deps", strings::<&str>(&[]))]);
        assert_eq!(deep_merge(&base, &overlay)["deps"], strings(&["a"]));
    }

    #[test]
    fn nested_tables_merge_recursively() {
        let base = table([(
            "tool",
            ConfigValue::Table(table([
                ("ruff", ConfigValue::Table(table([("line-length", 88_i64.into())]))),
                ("mypy", ConfigValue::Table(table([("strict", true.into())]))),
            ])),
        )]);
        let overlay = table([(
            "tool",
            ConfigValue::Table(table([(
                "mypy",
                ConfigValue::Table(table([("plugins", strings(&["pydantic.mypy"]))])),
            )])),
        )]);

        let merged = deep_merge(&base, &overlay);
        assert_eq!(
            get_path(&merged, &["tool", "ruff", "line-length"]),
            Some(&ConfigValue::Integer(88))
        );
        assert_eq!(
            get_path(&merged, &["tool", "mypy", "strict"]),
            Some(&ConfigValue::Boolean(true))
        );
        assert_eq!(
            get_path(&merged, &["tool", "mypy", "plugins"]),
            Some(&strings(&["pydantic.mypy"]))
        );
    }

    #[test]
    fn key_order_is_base_then_new() {
        let base = table([("b", s("1")), ("a", s("2"))]);
        let overlay = table([("c", s("3")), ("b", s("9"))]);
        let merged = deep_merge(&base, &overlay);
        let keys: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(merged["b"], s("9"));
    }

    #[test]
    fn type_mismatch_takes_overlay() {
        let base = table([("x", strings(&["a"]))]);
        let overlay = table([("x", s("scalar"))]);
        assert_eq!(deep_merge(&base, &overlay)["x"], s("scalar"));
    }

    #[test]
    fn substitute_rewrites_keys_and_values() {
        let ctx = RenderContext::new().with_variable("PACKAGE_PATH", "src/app");
        let t = table([(
            "{{PACKAGE_PATH}}/config.py",
            strings(&["F401", "{{PACKAGE_PATH}}"]),
        )]);
        let out = substitute_table(&t, &ctx);
        assert_eq!(out["src/app/config.py"], strings(&["F401", "src/app"]));
    }
}
