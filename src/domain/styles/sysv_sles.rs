use std::path::{Path, PathBuf};

use serde_json::json;

use crate::domain::render::{Dialect, render_limits, render_pre_start, shell_escape, shell_join};
use crate::domain::service::{ConfigurationError, InitStyle, ServiceSpec};

use super::{INIT_D_DIR, StyleRenderer, summary};

/// SUSE init script built on `startproc`/`killproc` and `rc.status`.
pub struct SysvSles;

const CASE_BODY: Dialect = Dialect::Shell { indent: 8 };

/// `startproc` options for an explicitly configured identity.
fn startproc_options(spec: &ServiceSpec) -> String {
    let mut options = String::new();
    if let Some(user) = &spec.user {
        options.push_str(&format!("-u {} ", shell_escape(user)));
    }
    if let Some(group) = &spec.group {
        options.push_str(&format!("-g {} ", shell_escape(group)));
    }
    options
}

impl StyleRenderer for SysvSles {
    fn style(&self) -> InitStyle {
        InitStyle::SysvSles
    }

    fn template_name(&self) -> &'static str {
        "sysv_sles.j2"
    }

    fn install_path(&self, spec: &ServiceSpec) -> Result<PathBuf, ConfigurationError> {
        Ok(Path::new(INIT_D_DIR).join(&spec.name))
    }

    fn context(&self, spec: &ServiceSpec) -> Result<serde_json::Value, ConfigurationError> {
        Ok(json!({
            "name": spec.name,
            "summary": summary(spec),
            "executable": shell_escape(spec.executable()),
            "command": shell_join(&spec.command),
            "startproc_options": startproc_options(spec),
            "limits": render_limits(&spec.ulimit, CASE_BODY),
            "pre_start": render_pre_start(&spec.before_command, CASE_BODY),
        }))
    }
}
