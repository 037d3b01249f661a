//! initscript: render init scripts and service definitions for SysV (Debian,
//! SLES, Red Hat), systemd, Upstart, and launchd from one service description.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use adapters::EmbeddedTemplates;
pub use app::ArtifactAssembler;
pub use app::config::{SpecFormat, load_service_spec, parse_service_spec};
pub use domain::render::{shell_escape, shell_join, xml_escape};
pub use domain::{AppError, Artifact, ConfigurationError, InitStyle, LimitTable, ServiceSpec};

/// Render `spec` with the embedded templates.
///
/// Fails with `AppError::Configuration` when the spec cannot be rendered for
/// its init style. Nothing is written to disk.
pub fn render(spec: &ServiceSpec) -> Result<Artifact, AppError> {
    ArtifactAssembler::embedded()?.render(spec)
}

/// Load the spec file at `path` and render it.
///
/// `style_override` replaces the file's `init_style`.
pub fn render_file(path: &Path, style_override: Option<InitStyle>) -> Result<Artifact, AppError> {
    let spec = load_service_spec(path, style_override)?;
    render(&spec)
}
