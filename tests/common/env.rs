//! Test environment for isolated crmnav runs.
//!
//! Each `TestEnv` owns a project directory (the working directory of every
//! run) and a separate config home, so a developer's own
//! `~/.config/crmnav/config.toml` never leaks into a test.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a crmnav CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for every run
    pub project_root: TempDir,
    /// Stands in for `$XDG_CONFIG_HOME` and `$HOME`
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_crmnav")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root, creating parent directories
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.project_path(relative), content)
    }

    /// Write `crmnav/config.toml` under the isolated config home
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        write_file(
            &self.config_home.path().join("crmnav/config.toml"),
            content,
        )
    }

    /// Run crmnav from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run crmnav with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("Failed to execute crmnav"))
    }

    /// Run crmnav feeding `input` on stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn crmnav");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        to_result(child.wait_with_output().expect("Failed to wait for crmnav"))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env_remove("RUST_LOG");
        for key in ["CRMNAV_MENU", "CRMNAV_HOME", "CRMNAV_VERBOSITY", "CRMNAV_ASCII"] {
            cmd.env_remove(key);
        }
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
    path.to_path_buf()
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
