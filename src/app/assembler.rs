use tracing::debug;

use crate::adapters::EmbeddedTemplates;
use crate::domain::{AppError, Artifact, ServiceSpec, renderer_for};
use crate::ports::TemplateRenderer;

/// Top-level rendering entry point.
///
/// Validates the spec, dispatches to the renderer of its init style, and
/// returns the artifact unchanged. Every call renders afresh.
pub struct ArtifactAssembler<T: TemplateRenderer = EmbeddedTemplates> {
    templates: T,
}

impl ArtifactAssembler<EmbeddedTemplates> {
    /// Assembler over the templates bundled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Ok(Self::new(EmbeddedTemplates::new()?))
    }
}

impl<T: TemplateRenderer> ArtifactAssembler<T> {
    pub fn new(templates: T) -> Self {
        Self { templates }
    }

    pub fn render(&self, spec: &ServiceSpec) -> Result<Artifact, AppError> {
        let style = spec.validate()?;
        let artifact = renderer_for(style).render(spec, &self.templates)?;
        debug!(
            style = %style,
            service = %spec.name,
            path = %artifact.path.display(),
            bytes = artifact.content.len(),
            "Rendered service artifact"
        );
        Ok(artifact)
    }
}
