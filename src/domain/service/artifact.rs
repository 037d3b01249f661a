use std::path::PathBuf;

use serde::Serialize;

/// File mode for artifacts the init system executes.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// File mode for artifacts the init system only reads.
pub const CONFIG_MODE: u32 = 0o644;

/// A fully rendered service artifact and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Absolute install location.
    pub path: PathBuf,
    /// Complete file body.
    pub content: String,
    /// Suggested permission bits for the installed file.
    pub mode: u32,
}
