//! Shared testing utilities for initscript integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for spec files.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory holding spec files written by the test.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `file_name` and return its path.
    pub fn write_spec(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(file_name);
        fs::write(&path, content).expect("Failed to write spec file");
        path
    }

    /// Build a command for invoking the compiled `initscript` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("initscript").expect("Failed to locate initscript binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }
}

/// Spec file for the service used across scenarios.
#[allow(dead_code)]
pub const SAMPLE_YAML: &str = r#"name: initscriptname
command: [foo, bar, "baz <baz> baz"]
"#;
