//! Application ports (traits) for external dependencies.
//!
//! Driven (output) ports, called by the services and implemented in
//! `pysetup-adapters`:
//!   - `ManifestSerializer`: config table → document text
//!   - `Filesystem`: file operations

pub mod output;

pub use output::{Filesystem, ManifestSerializer};

#[cfg(test)]
pub use output::{MockFilesystem, MockManifestSerializer};
