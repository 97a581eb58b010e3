// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target command execution.
//!
//! Commands run through `bash -c` in the target's working directory with
//! stderr merged into stdout. There is no timeout: a command that never
//! exits blocks its worker.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::target::TimeMode;

/// Captured output of one command.
#[derive(Debug)]
pub struct CommandOutput {
    /// Combined stdout and stderr, split into lines.
    pub lines: Vec<String>,
    pub status: ExitStatus,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// The bash script executed for `command`.
///
/// Timed commands are wrapped in the `time` keyword so the timing lines
/// end up at the tail of the captured output.
pub fn shell_script(command: &str, time_mode: TimeMode) -> String {
    if time_mode.is_active() {
        format!("{{ time ( {} ) ; }} 2>&1", command)
    } else {
        format!("( {} ) 2>&1", command)
    }
}

/// Run `command` in `dir` and capture its output.
pub fn run_command(command: &str, dir: &Path, time_mode: TimeMode) -> io::Result<CommandOutput> {
    tracing::debug!("running `{}` in {}", command, dir.display());
    let output = Command::new("bash")
        .arg("-c")
        .arg(shell_script(command, time_mode))
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()?;

    let text = String::from_utf8_lossy(&output.stdout);
    let lines = text
        .trim_end()
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect();

    Ok(CommandOutput {
        lines,
        status: output.status,
    })
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
