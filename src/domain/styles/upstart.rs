use std::path::{Path, PathBuf};

use serde_json::json;

use crate::domain::render::{Dialect, one_line, render_limits, render_pre_start, shell_join};
use crate::domain::service::{ConfigurationError, InitStyle, ServiceSpec};

use super::StyleRenderer;

const JOB_DIR: &str = "/etc/init";

/// Upstart job configuration.
pub struct Upstart;

/// Description text for a double-quoted `description` stanza.
fn quoted_description(description: &str) -> String {
    one_line(description).replace('\\', r"\\").replace('"', r#"\""#)
}

impl StyleRenderer for Upstart {
    fn style(&self) -> InitStyle {
        InitStyle::Upstart
    }

    fn template_name(&self) -> &'static str {
        "upstart.conf.j2"
    }

    fn install_path(&self, spec: &ServiceSpec) -> Result<PathBuf, ConfigurationError> {
        Ok(Path::new(JOB_DIR).join(format!("{}.conf", spec.name)))
    }

    fn context(&self, spec: &ServiceSpec) -> Result<serde_json::Value, ConfigurationError> {
        let run_as = spec.run_as(self.style());
        Ok(json!({
            "name": spec.name,
            "description": quoted_description(&spec.description),
            "has_description": !spec.description.is_empty(),
            "user": run_as.user,
            "group": run_as.group,
            "source_default_file": spec.source_default_file,
            "limits": render_limits(&spec.ulimit, Dialect::Upstart),
            "pre_start": render_pre_start(&spec.before_command, Dialect::Upstart),
            "command": shell_join(&spec.command),
        }))
    }
}
