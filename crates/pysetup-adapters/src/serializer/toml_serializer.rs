//! TOML output via the `toml` crate.

use pysetup_core::{
    application::{ApplicationError, ports::ManifestSerializer},
    domain::ConfigTable,
    error::SetupResult,
};
use tracing::trace;

/// Pretty TOML; tables keep merged insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlSerializer;

impl TomlSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestSerializer for TomlSerializer {
    fn serialize(&self, manifest: &ConfigTable) -> SetupResult<String> {
        let text = toml::to_string_pretty(manifest).map_err(|e| {
            ApplicationError::SerializationFailed {
                reason: e.to_string(),
            }
        })?;
        trace!(bytes = text.len(), "Manifest serialized");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pysetup_core::domain::{
        ConfigValue,
        value::{strings, table},
    };

    #[test]
    fn nested_tables_become_headers() {
        let manifest = table([
            (
                "project",
                ConfigValue::Table(table([
                    ("name", ConfigValue::from("mylib")),
                    ("dependencies", strings::<&str>(&[])),
                ])),
            ),
            (
                "tool",
                ConfigValue::Table(table([(
                    "ruff",
                    ConfigValue::Table(table([("line-length", ConfigValue::Integer(88))])),
                )])),
            ),
        ]);

        let text = TomlSerializer::new().serialize(&manifest).unwrap();
        let parsed: toml::Table = toml::from_str(&text).unwrap();

        assert_eq!(parsed["project"]["name"].as_str(), Some("mylib"));
        assert_eq!(
            parsed["project"]["dependencies"].as_array().map(Vec::len),
            Some(0)
        );
        assert_eq!(parsed["tool"]["ruff"]["line-length"].as_integer(), Some(88));
    }

    #[test]
    fn key_order_is_preserved() {
        let manifest = table([
            ("zeta", ConfigValue::from("1")),
            ("alpha", ConfigValue::from("2")),
        ]);
        let text = TomlSerializer::new().serialize(&manifest).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha);
    }
}
