use std::path::{Path, PathBuf};

use serde_json::json;

use crate::domain::render::{Dialect, render_limits, render_pre_start, shell_join};
use crate::domain::service::{ConfigurationError, InitStyle, ServiceSpec};

use super::{INIT_D_DIR, StyleRenderer, summary};

/// LSB init script driven by `start-stop-daemon`.
///
/// The executable goes into `DAEMON=` unescaped; arguments are escaped into
/// the `DAEMON_ARGS` bash array.
pub struct SysvDebian;

const SCRIPT_BODY: Dialect = Dialect::Shell { indent: 4 };

impl StyleRenderer for SysvDebian {
    fn style(&self) -> InitStyle {
        InitStyle::SysvDebian
    }

    fn template_name(&self) -> &'static str {
        "sysv_debian.j2"
    }

    fn install_path(&self, spec: &ServiceSpec) -> Result<PathBuf, ConfigurationError> {
        Ok(Path::new(INIT_D_DIR).join(&spec.name))
    }

    fn context(&self, spec: &ServiceSpec) -> Result<serde_json::Value, ConfigurationError> {
        let run_as = spec.run_as(self.style());
        Ok(json!({
            "name": spec.name,
            "summary": summary(spec),
            "executable": spec.executable(),
            "args": shell_join(spec.args()),
            "user": run_as.user,
            "group": run_as.group,
            "source_default_file": spec.source_default_file,
            "limits": render_limits(&spec.ulimit, SCRIPT_BODY),
            "pre_start": render_pre_start(&spec.before_command, SCRIPT_BODY),
        }))
    }
}
