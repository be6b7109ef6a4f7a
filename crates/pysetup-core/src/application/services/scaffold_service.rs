//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole `init` workflow:
//! 1. Render the document for a preset + spec
//! 2. Refuse existing targets unless overwriting
//! 3. Write every file, rolling back on failure

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, RenderService,
        ports::{Filesystem, ManifestSerializer},
    },
    domain::{Preset, ProjectSpec, RelativePath, RenderedDocument},
    error::SetupResult,
};

/// Paths written by one [`ScaffoldService::write`] call, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: RenderService,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pysetup_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     serializer, // impl ManifestSerializer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(serializer: Box<dyn ManifestSerializer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer: RenderService::new(serializer),
            filesystem,
        }
    }

    pub fn render(&self, preset: &Preset, spec: &ProjectSpec) -> SetupResult<RenderedDocument> {
        self.renderer.render(preset, spec)
    }

    /// Render then write in one step.
    #[instrument(
        skip_all,
        fields(preset = preset.name, project = %spec.name, output = %output_dir.display())
    )]
    pub fn scaffold(
        &self,
        preset: &Preset,
        spec: &ProjectSpec,
        output_dir: &Path,
        overwrite: bool,
    ) -> SetupResult<WriteReport> {
        let document = self.render(preset, spec)?;
        self.write(&document, output_dir, overwrite)
    }

    /// Target paths of `document` that already exist under `output_dir`.
    pub fn conflicts(&self, document: &RenderedDocument, output_dir: &Path) -> Vec<PathBuf> {
        document
            .files()
            .iter()
            .map(|file| output_dir.join(file.path))
            .filter(|path| self.filesystem.exists(path))
            .collect()
    }

    /// Write every file of `document` under `output_dir`.
    ///
    /// Without `overwrite`, any existing target aborts the call before anything
    /// is written. On a failed write, files written so far are removed.
    #[instrument(skip_all, fields(output = %output_dir.display(), overwrite = overwrite))]
    pub fn write(
        &self,
        document: &RenderedDocument,
        output_dir: &Path,
        overwrite: bool,
    ) -> SetupResult<WriteReport> {
        if !overwrite {
            if let Some(path) = self.conflicts(document, output_dir).into_iter().next() {
                return Err(ApplicationError::OutputExists { path }.into());
            }
        }

        let mut written = Vec::new();
        match self.write_all(document, output_dir, &mut written) {
            Ok(()) => {
                info!(files = written.len(), "Successfully wrote all files");
                Ok(WriteReport { written })
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&written);
                Err(e)
            }
        }
    }

    fn write_all(
        &self,
        document: &RenderedDocument,
        output_dir: &Path,
        written: &mut Vec<PathBuf>,
    ) -> SetupResult<()> {
        for file in document.files() {
            let path = RelativePath::try_new(file.path)?.under(output_dir);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, file.content)?;
            written.push(path);
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, written: &[PathBuf]) {
        for path in written.iter().rev() {
            if let Err(e) = self.filesystem.remove_file(path) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────
