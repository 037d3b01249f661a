use std::io;
use std::path::Path;

use super::OutputFormat;
use crate::domain::{AppError, InitStyle, ServiceSpec, renderer_for};

pub(super) fn run_render(
    spec_file: &Path,
    style: Option<InitStyle>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let artifact = crate::render_file(spec_file, style)?;

    match format {
        OutputFormat::Text => print!("{}", artifact.content),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&artifact).map_err(io::Error::from)?;
            println!("{}", json);
        }
    }
    Ok(())
}

pub(super) fn run_path(spec_file: &Path, style: Option<InitStyle>) -> Result<(), AppError> {
    let artifact = crate::render_file(spec_file, style)?;
    println!("{}", artifact.path.display());
    Ok(())
}

pub(super) fn run_styles() -> Result<(), AppError> {
    let placeholder = ServiceSpec::new("<name>", ["<command>"]).with_launchd_name("<launchd_name>");

    for style in InitStyle::ALL {
        let path = renderer_for(style).install_path(&placeholder)?;
        println!("{:<12} {}", style, path.display());
    }
    Ok(())
}
