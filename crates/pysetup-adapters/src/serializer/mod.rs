//! Manifest serializers.

mod toml_serializer;

pub use toml_serializer::TomlSerializer;
