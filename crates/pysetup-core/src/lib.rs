//! pyproject-setup core - presets, rendering, and ports.
//!
//! This crate provides the domain and application layers for the
//! `pyproject-setup` scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          pysetup-cli (CLI)              │
//! │   (prompts, flags, config, exit codes)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (RenderService, ScaffoldService,        │
//! │  PresetService)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (ManifestSerializer, Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pysetup-adapters (Infrastructure)    │
//! │ (TomlSerializer, LocalFilesystem, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Preset, ProjectSpec, ConfigTable,      │
//! │  deep_merge, RenderedDocument)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pysetup_core::{application::RenderService, domain::{registry, ProjectSpec}};
//!
//! let preset = registry::lookup("library")?;
//! let spec = ProjectSpec::builder().name("mylib").workflow(false).build(preset)?;
//!
//! // serializer: any `ManifestSerializer`, e.g. `pysetup_adapters::TomlSerializer`
//! let service = RenderService::new(serializer);
//! let document = service.render(preset, &spec)?;
//! assert!(document.workflow.is_none());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PresetInfo, PresetService, RenderService, ScaffoldService,
        ports::{Filesystem, ManifestSerializer},
    };
    pub use crate::domain::{
        ConfigTable, ConfigValue, Preset, ProjectInput, ProjectSpec, RenderContext,
        RenderedDocument, registry,
    };
    pub use crate::error::{SetupError, SetupResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
