use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::warn;

use crate::domain::service::{ConfigurationError, InitStyle, ServiceSpec};

use super::StyleRenderer;

const DAEMONS_DIR: &str = "/Library/LaunchDaemons";

/// launchd daemon property list.
///
/// Program arguments are emitted token by token, so no shell quoting applies.
/// Pre-start commands, resource limits, and default-file sourcing have no
/// counterpart here and are dropped.
pub struct Launchd;

fn label(spec: &ServiceSpec) -> Result<String, ConfigurationError> {
    let launchd_name = spec.launchd_name.as_deref().ok_or(ConfigurationError::MissingLaunchdName)?;
    Ok(format!("{launchd_name}.daemon"))
}

impl StyleRenderer for Launchd {
    fn style(&self) -> InitStyle {
        InitStyle::Launchd
    }

    fn template_name(&self) -> &'static str {
        "launchd.plist.j2"
    }

    fn install_path(&self, spec: &ServiceSpec) -> Result<PathBuf, ConfigurationError> {
        Ok(Path::new(DAEMONS_DIR).join(format!("{}.plist", label(spec)?)))
    }

    fn context(&self, spec: &ServiceSpec) -> Result<serde_json::Value, ConfigurationError> {
        let label = label(spec)?;
        if !spec.before_command.is_empty() {
            warn!(
                service = %spec.name,
                count = spec.before_command.len(),
                "launchd has no pre-start hook; dropping before_command"
            );
        }
        if !spec.ulimit.is_empty() {
            warn!(service = %spec.name, count = spec.ulimit.len(), "dropping ulimit entries for launchd");
        }
        if spec.source_default_file {
            warn!(service = %spec.name, "launchd cannot source a default file; ignoring");
        }

        let run_as = spec.run_as(self.style());
        Ok(json!({
            "label": label,
            "program_arguments": spec.command,
            "user": run_as.user,
            "group": run_as.group,
        }))
    }
}
