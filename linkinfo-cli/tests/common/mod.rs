//! Common test utilities for CLI integration tests.
//!
//! Each [`TestEnv`] points `HOME` at a fresh temporary directory and clears
//! `LINKINFO_*` variables, so the user's own configuration never leaks into
//! a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LINKINFO_ENV_VARS: [&str; 5] = [
    "LINKINFO_CONFIG",
    "LINKINFO_LOG_MODE",
    "LINKINFO_MARKDOWN_EXTENSIONS",
    "LINKINFO_WIKI_PAGE_EXTENSIONS",
    "LINKINFO_OUTPUT_FORMAT",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as `HOME`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder for the linkinfo binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("linkinfo").expect("Failed to find linkinfo binary");
        cmd.env("HOME", &self.home);
        for var in LINKINFO_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write the user configuration file (`~/.linkinfo/config.yaml`).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".linkinfo");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.home
    }
}

/// Run a command and return its stdout as a string, asserting success.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}
