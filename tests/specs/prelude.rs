//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for building oval projects in temp directories.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Descriptor shared by most specs.
pub const DEMO_CONFIG: &str = r#"
[[targets]]
name = "demo1"
command = "echo LINE 1 && echo LINE 2 && echo LINE 3"

[[targets]]
name = "demo2"
command = "echo LINE 10 && echo DEBUG noise && echo LINE 30"

[[targets]]
name = "keys"
command = "echo A = 1 && echo B = 20 && echo C = 3"

[[targets]]
name = "failing"
command = "echo partial; exit 3"

[[run_filters_out]]
re = "^DEBUG"

[[diff_filters_in]]
re = '^(LINE .*)$'
apply = "demo%"

[[diff_filters_in]]
re = '^(\w+) = (.*)$'
apply = "keys"
"#;

/// Returns a Command configured to run the oval binary
pub fn oval_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("oval"))
}

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty project with no descriptor.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project whose root holds `oval.toml` with `config`.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("oval.toml", config);
        project
    }

    /// The demo project.
    pub fn demo() -> Self {
        Self::with_config(DEMO_CONFIG)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }

    /// An oval command run inside the project, without color or log file.
    pub fn oval(&self, args: &[&str]) -> Command {
        let mut cmd = oval_cmd();
        cmd.args(["--color", "never", "--no-log-file"])
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("OVAL_JOBS");
        cmd
    }

    /// Stdout of a successful oval run.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.oval(args).output().unwrap();
        assert!(
            output.status.success(),
            "oval {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}
