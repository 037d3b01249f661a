//! Test helpers shared by unit tests.

use crate::adapters::EmbeddedTemplates;
use crate::domain::service::{Artifact, InitStyle, ServiceSpec};
use crate::domain::styles::renderer_for;

/// Service with a command that needs shell and XML escaping.
pub(crate) fn sample_spec(style: InitStyle) -> ServiceSpec {
    ServiceSpec::new("initscriptname", ["foo", "bar", "baz <baz> baz"]).with_init_style(style)
}

/// Render through the style's renderer and the embedded templates.
pub(crate) fn render(spec: &ServiceSpec) -> Artifact {
    let style = spec.validate().expect("spec should be valid");
    let templates = EmbeddedTemplates::new().expect("templates should load");
    renderer_for(style).render(spec, &templates).expect("render should succeed")
}

/// Lines of `content` that start with `prefix` after leading whitespace.
pub(crate) fn lines_starting_with<'a>(content: &'a str, prefix: &str) -> Vec<&'a str> {
    content.lines().filter(|line| line.trim_start().starts_with(prefix)).collect()
}
