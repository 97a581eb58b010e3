// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color selection and the report color scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// When to color report output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode against `--no-color`, `NO_COLOR` and whether
    /// stdout is a terminal.
    pub fn choice(self, no_color_flag: bool) -> ColorChoice {
        let no_color = no_color_flag || std::env::var_os("NO_COLOR").is_some();
        match self {
            ColorMode::Always => resolve_color(true, no_color_flag),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if std::io::stdout().is_terminal() => resolve_color(false, no_color),
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

/// Combine a force flag with a no-color flag. No-color wins.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color specs for report lines.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Working-directory headers.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// The pass marker.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Discrepancy lines.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
