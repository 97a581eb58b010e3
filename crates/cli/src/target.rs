// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Targets: named shell commands under test.

use serde::Deserialize;

use crate::filter::{ExclusionFilter, ExtractionFilter};

/// Which timing line, if any, is compared against the reference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    #[default]
    Off,
    Real,
    User,
}

impl TimeMode {
    /// Label of the bash `time` line this mode reads.
    pub fn label(self) -> Option<&'static str> {
        match self {
            TimeMode::Off => None,
            TimeMode::Real => Some("real"),
            TimeMode::User => Some("user"),
        }
    }

    pub fn is_active(self) -> bool {
        self != TimeMode::Off
    }
}

/// A target with the filters attached for one invocation.
#[derive(Debug, Clone)]
pub struct Target {
    pub name: String,
    pub command: String,
    /// Optional build step run by `oval build`.
    pub build: Option<String>,
    pub time_mode: TimeMode,
    /// Lines matching any of these are dropped before `.out` is written.
    pub run_filters_out: Vec<ExclusionFilter>,
    /// Filters extracting comparison tokens, in attachment order.
    pub diff_filters_in: Vec<ExtractionFilter>,
}
