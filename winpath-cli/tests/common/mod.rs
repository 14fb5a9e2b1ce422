//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// The user configuration file is looked up under the home directory, so
/// every command runs with `HOME` and `USERPROFILE` pointed at a temporary
/// directory and with the `WINPATH_*` variables cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with the environment isolated.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("winpath").expect("Failed to find winpath binary");
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path)
            .env_remove("WINPATH_CONFIG")
            .env_remove("WINPATH_OUTPUT_FORMAT")
            .env_remove("WINPATH_STRICT")
            .env_remove("WINPATH_EXTENDED")
            .env_remove("WINPATH_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a configuration file and return its path.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Write the user configuration file (`~/.winpath/config.yaml`).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.create_dir(".winpath");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run a command and parse its YAML report output.
    pub fn yaml_of(&self, args: &[&str]) -> serde_yaml::Value {
        let stdout = self.stdout_of(args);
        serde_yaml::from_str(&stdout).expect("Output is not valid YAML")
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        self.stdout_with(self.command().args(args))
    }

    /// Run a prepared command and return its stdout, asserting success.
    pub fn stdout_with(&self, cmd: &mut Command) -> String {
        let output = cmd.output().expect("Failed to run winpath");
        assert!(
            output.status.success(),
            "winpath failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
