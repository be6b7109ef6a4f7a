//! Render Service - preset + spec → document text.
//!
//! Pure apart from the serializer port: nothing is written here.

use tracing::{debug, instrument};

use crate::{
    application::ports::ManifestSerializer,
    domain::{
        DomainValidator as validator, Preset, ProjectSpec, RenderContext, RenderedDocument,
        manifest,
        workflow::{STYLE_YAPF, publish_workflow},
    },
    error::SetupResult,
};

pub struct RenderService {
    serializer: Box<dyn ManifestSerializer>,
}

impl RenderService {
    pub fn new(serializer: Box<dyn ManifestSerializer>) -> Self {
        Self { serializer }
    }

    /// Render the manifest and, when enabled, the workflow and style file.
    ///
    /// Fails with `InvalidField` before any work if a required field is blank.
    #[instrument(skip_all, fields(preset = preset.name, project = %spec.name))]
    pub fn render(&self, preset: &Preset, spec: &ProjectSpec) -> SetupResult<RenderedDocument> {
        validator::validate_spec(spec)?;

        let ctx = RenderContext::for_spec(spec);
        let merged = manifest::compose(preset, spec, &ctx);
        debug!(sections = merged.len(), "Manifest composed");

        let manifest = self.serializer.serialize(&merged)?;

        let workflow = spec
            .workflow
            .then(|| publish_workflow(preset, &spec.extra_dev_dependencies, &ctx));
        let style_config = spec.style_config.then(|| STYLE_YAPF.to_string());

        debug!(
            workflow = workflow.is_some(),
            style_config = style_config.is_some(),
            "Document rendered"
        );

        Ok(RenderedDocument {
            manifest,
            workflow,
            style_config,
        })
    }
}
