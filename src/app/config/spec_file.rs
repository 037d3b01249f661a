//! Service spec files (YAML or TOML).

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, ConfigurationError, InitStyle, LimitTable, ServiceSpec};

/// Serialization format of a spec file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Toml,
}

impl SpecFormat {
    /// `.toml` files are TOML; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => SpecFormat::Toml,
            _ => SpecFormat::Yaml,
        }
    }
}

/// On-disk shape of a service spec. `init_style` stays textual so unknown
/// names surface as configuration errors.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceSpecFile {
    name: String,
    command: Vec<String>,
    #[serde(default)]
    init_style: Option<String>,
    #[serde(default)]
    before_command: Vec<Vec<String>>,
    #[serde(default)]
    ulimit: LimitTable,
    #[serde(default)]
    description: String,
    #[serde(default)]
    source_default_file: bool,
    #[serde(default)]
    launchd_name: Option<String>,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    group: Option<String>,
}

impl ServiceSpecFile {
    fn into_spec(self, style_override: Option<InitStyle>) -> Result<ServiceSpec, ConfigurationError> {
        let init_style = match style_override {
            Some(style) => Some(style),
            None => self.init_style.as_deref().map(str::parse::<InitStyle>).transpose()?,
        };

        Ok(ServiceSpec {
            name: self.name,
            command: self.command,
            init_style,
            before_command: self.before_command,
            ulimit: self.ulimit,
            description: self.description,
            source_default_file: self.source_default_file,
            launchd_name: self.launchd_name,
            user: self.user,
            group: self.group,
        })
    }
}

/// Parse spec file content. `style_override` replaces the file's `init_style`.
pub fn parse_service_spec(
    content: &str,
    format: SpecFormat,
    what: &str,
    style_override: Option<InitStyle>,
) -> Result<ServiceSpec, AppError> {
    let file: ServiceSpecFile = match format {
        SpecFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| AppError::parse_error(what, e))?
        }
        SpecFormat::Toml => toml::from_str(content).map_err(|e| AppError::parse_error(what, e))?,
    };
    Ok(file.into_spec(style_override)?)
}

/// Read and parse the spec file at `path`.
pub fn load_service_spec(
    path: &Path,
    style_override: Option<InitStyle>,
) -> Result<ServiceSpec, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
    parse_service_spec(
        &content,
        SpecFormat::from_path(path),
        &path.display().to_string(),
        style_override,
    )
}
