//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing config files into them
//! - Executing CLI commands that never see the developer's own config

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use pascaltri_testing::TestWorld;
///
/// let world = TestWorld::new().with_config("format = \"plain\"\n");
///
/// let result = world.run(&["2", "16"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    discover_config: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    ///
    /// The config path points into the temp dir but no file is written
    /// until [`TestWorld::with_config`] is called.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("pascaltri").join("config.toml");

        Self {
            temp_dir,
            config_path,
            discover_config: false,
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the config file path handed to the CLI.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `contents` as the config file.
    pub fn with_config(self, contents: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Leave `PASCALTRI_CONFIG` unset so the CLI finds the config file
    /// through the user config directory, which points at the temp dir.
    pub fn with_config_discovery(mut self) -> Self {
        self.discover_config = true;
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The config location is passed through `PASCALTRI_CONFIG` so that an
    /// explicit `--config` in the test arguments still wins.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path());

        if self.discover_config {
            cmd.env_remove("PASCALTRI_CONFIG");
        } else {
            cmd.env("PASCALTRI_CONFIG", &self.config_path);
        }

        cmd
    }

    /// Create a CLI command configured for this test environment.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("pascaltri")
            .map_err(|e| anyhow::anyhow!("Failed to find pascaltri binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute the binary with `args` and capture the result.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, if the process was not killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Parse stdout as one JSON document per line.
    pub fn json_lines(&self) -> Result<Vec<serde_json::Value>> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Ok(serde_json::from_str(line)?))
            .collect()
    }
}
