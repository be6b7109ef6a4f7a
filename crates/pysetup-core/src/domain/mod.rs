//! Core domain layer for pyproject-setup.
//!
//! Pure logic only: presets, project fields, config values and the merge over
//! them. All I/O (serialization, filesystem) goes through ports defined in the
//! application layer.
//!
//! - **No I/O**: nothing here touches the filesystem or prints
//! - **Static data**: presets are compile-time tables
//! - **Immutable values**: every operation returns a new structure

pub mod entities;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod render_context;
pub mod tooling;
pub mod value;
pub mod workflow;

mod validation;

pub use entities::{
    Author, MANIFEST_PATH, OutputFile, Preset, PresetDefaults, ProjectInput, ProjectSpec,
    RelativePath, RenderedDocument, STYLE_CONFIG_PATH, WORKFLOW_PATH,
};
pub use error::{DomainError, ErrorCategory};
pub use render_context::{RenderContext, minimum_python};
pub use validation::DomainValidator;
pub use value::{ConfigTable, ConfigValue, deep_merge};
