//! Application layer for pyproject-setup.
//!
//! This layer contains:
//! - **Services**: use case orchestration (RenderService, ScaffoldService, PresetService)
//! - **Ports**: traits for serialization and filesystem access
//! - **Errors**: application-specific error types
//!
//! Business rules (merge, defaults, presets) live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{PresetInfo, PresetService, RenderService, ScaffoldService, WriteReport};

pub use ports::{Filesystem, ManifestSerializer};

pub use error::ApplicationError;
