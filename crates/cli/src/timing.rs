// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration lines appended by the bash `time` keyword.
//!
//! A timed target ends its output with lines such as `real\t0m1.004s`.
//! They are split off the line stream before extraction so they never
//! reach the token comparison, and the one matching the target's
//! [`TimeMode`] becomes its duration.

use std::sync::LazyLock;

use regex::Regex;

use crate::target::TimeMode;

/// Number of trailing lines inspected for timing output.
pub const TIMING_WINDOW: usize = 4;

/// Maximum relative deviation from the reference duration.
pub const TIME_TOLERANCE: f64 = 0.2;

#[allow(clippy::expect_used)]
static TIMING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(real|user|sys)\s+(\d+)m(\d+(?:[.,]\d*)?)s$").expect("valid regex pattern")
});

/// Lines left for extraction, plus the duration read from the timing lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<'a> {
    pub lines: Vec<&'a str>,
    /// The timing lines that were split off, in order.
    pub timing: Vec<&'a str>,
    /// Seconds; zero when no line carried the requested label.
    pub duration: f64,
}

/// Parse one timing line into its label and duration in seconds.
pub fn parse_timing_line(line: &str) -> Option<(&str, f64)> {
    let caps = TIMING_LINE.captures(line.trim_end())?;
    let label = caps.get(1)?.as_str();
    let minutes: f64 = caps.get(2)?.as_str().parse().ok()?;
    // bash follows LC_NUMERIC for the decimal separator
    let seconds: f64 = caps.get(3)?.as_str().replace(',', ".").parse().ok()?;
    Some((label, minutes * 60.0 + seconds))
}

/// Split the timing lines off the tail of `lines`.
///
/// With [`TimeMode::Off`] the lines pass through untouched. Otherwise
/// every timing line in the last [`TIMING_WINDOW`] lines is removed, along
/// with blank lines in that window once any timing line was found.
pub fn split_timing<'a, S: AsRef<str>>(lines: &'a [S], mode: TimeMode) -> Timed<'a> {
    let all: Vec<&'a str> = lines.iter().map(AsRef::as_ref).collect();
    let Some(label) = mode.label() else {
        return Timed {
            lines: all,
            timing: Vec::new(),
            duration: 0.0,
        };
    };

    let start = all.len().saturating_sub(TIMING_WINDOW);
    let (head, window) = all.split_at(start);

    let mut duration = 0.0;
    let mut timing = Vec::new();
    let mut rest = Vec::with_capacity(window.len());
    for &line in window {
        match parse_timing_line(line) {
            Some((l, secs)) => {
                timing.push(line);
                if l == label {
                    duration = secs;
                }
            }
            None => rest.push(line),
        }
    }
    if !timing.is_empty() {
        rest.retain(|line| !line.trim().is_empty());
    }

    let mut kept = head.to_vec();
    kept.extend(rest);
    Timed {
        lines: kept,
        timing,
        duration,
    }
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
