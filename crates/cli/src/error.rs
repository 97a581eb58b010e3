// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit code of an oval invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every target passed.
    Success = 0,
    /// A target reported discrepancies, a command failed, or a directory
    /// could not be processed.
    Failure = 1,
    /// Oval itself could not run (bad arguments, logging setup).
    InternalError = 2,
}

impl ExitCode {
    /// Logical OR of per-job failures.
    pub fn from_failures(failed: usize) -> Self {
        if failed == 0 {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
