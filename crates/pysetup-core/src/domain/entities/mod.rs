pub mod common;
pub mod document;
pub mod preset;
pub mod spec;

pub use common::RelativePath;
pub use document::{MANIFEST_PATH, OutputFile, RenderedDocument, STYLE_CONFIG_PATH, WORKFLOW_PATH};
pub use preset::{Preset, PresetDefaults};
pub use spec::{Author, ProjectInput, ProjectSpec};
