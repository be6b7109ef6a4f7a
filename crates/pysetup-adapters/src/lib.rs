//! Infrastructure adapters for pyproject-setup.
//!
//! This crate implements the ports defined in `pysetup-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod serializer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use serializer::TomlSerializer;
