//! Per-style artifact renderers.
//!
//! Each init ecosystem is one `StyleRenderer`: it declares where its artifact
//! is installed, which embedded template holds the boilerplate, and builds the
//! template context from the escaping, limit, and pre-start primitives.

mod launchd;
mod systemd;
mod sysv_debian;
mod sysv_redhat;
mod sysv_sles;
mod upstart;

use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::render::one_line;
use crate::domain::service::{
    Artifact, CONFIG_MODE, ConfigurationError, EXECUTABLE_MODE, InitStyle, ServiceSpec,
};
use crate::ports::TemplateRenderer;

pub use launchd::Launchd;
pub use systemd::Systemd;
pub use sysv_debian::SysvDebian;
pub use sysv_redhat::SysvRedhat;
pub use sysv_sles::SysvSles;
pub use upstart::Upstart;

pub(crate) const INIT_D_DIR: &str = "/etc/init.d";

/// Renders a validated `ServiceSpec` into one init ecosystem's artifact.
pub trait StyleRenderer: Send + Sync {
    fn style(&self) -> InitStyle;

    /// Name of the embedded template holding the style boilerplate.
    fn template_name(&self) -> &'static str;

    /// Absolute install location of the artifact.
    fn install_path(&self, spec: &ServiceSpec) -> Result<PathBuf, ConfigurationError>;

    /// Template context for `spec`.
    fn context(&self, spec: &ServiceSpec) -> Result<serde_json::Value, ConfigurationError>;

    fn mode(&self) -> u32 {
        if self.style().is_sysv() { EXECUTABLE_MODE } else { CONFIG_MODE }
    }

    fn render(
        &self,
        spec: &ServiceSpec,
        templates: &dyn TemplateRenderer,
    ) -> Result<Artifact, AppError> {
        let path = self.install_path(spec)?;
        let context = self.context(spec)?;
        let content = templates.render(self.template_name(), &context)?;
        Ok(Artifact { path, content, mode: self.mode() })
    }
}

/// Renderer for `style`.
pub fn renderer_for(style: InitStyle) -> &'static dyn StyleRenderer {
    match style {
        InitStyle::SysvDebian => &SysvDebian,
        InitStyle::SysvSles => &SysvSles,
        InitStyle::SysvRedhat => &SysvRedhat,
        InitStyle::Systemd => &Systemd,
        InitStyle::Upstart => &Upstart,
        InitStyle::Launchd => &Launchd,
    }
}

/// One-line text for script headers: the description, or the name when empty.
pub(crate) fn summary(spec: &ServiceSpec) -> String {
    let description = one_line(&spec.description);
    if description.is_empty() { spec.name.clone() } else { description }
}
