//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::ConfigTable;
use crate::error::SetupResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pysetup_adapters::filesystem::LocalFilesystem` (production)
/// - `pysetup_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SetupResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SetupResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> SetupResult<()>;
}

/// Port for turning the merged manifest into document text.
///
/// Implemented by `pysetup_adapters::serializer::TomlSerializer`.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestSerializer: Send + Sync {
    fn serialize(&self, manifest: &ConfigTable) -> SetupResult<String>;
}
