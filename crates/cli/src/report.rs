// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-directory report buffer and its text/JSON output.
//!
//! A directory job collects its report lines here and the runner prints
//! the whole report at once when the job ends, so reports of concurrent
//! jobs never interleave.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::WriteColor;

use crate::color::scheme;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How a report line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Header,
    Plain,
    Pass,
    Discrepancy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub style: Style,
    pub text: String,
}

/// Everything one directory job has to say.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub dir: String,
    pub failed: bool,
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    fn push(&mut self, style: Style, text: impl Into<String>) {
        self.lines.push(ReportLine {
            style,
            text: text.into(),
        });
    }

    pub fn header(&mut self, text: impl Into<String>) {
        self.push(Style::Header, text);
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.push(Style::Plain, text);
    }

    pub fn pass(&mut self, text: impl Into<String>) {
        self.push(Style::Pass, text);
    }

    pub fn discrepancy(&mut self, text: impl Into<String>) {
        self.push(Style::Discrepancy, text);
    }

    /// Mark the job as failed; the process will exit non-zero.
    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// Plain text of every line, without styling.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

/// Write a report as colored text.
pub fn write_text(w: &mut dyn WriteColor, report: &Report) -> io::Result<()> {
    for line in &report.lines {
        let spec = match line.style {
            Style::Header => Some(scheme::header()),
            Style::Pass => Some(scheme::pass()),
            Style::Discrepancy => Some(scheme::fail()),
            Style::Plain => None,
        };
        match spec {
            Some(spec) => {
                w.set_color(&spec)?;
                write!(w, "{}", line.text)?;
                w.reset()?;
                writeln!(w)?;
            }
            None => writeln!(w, "{}", line.text)?,
        }
    }
    w.flush()
}

/// Write a report as a single JSON line.
pub fn write_json(w: &mut dyn Write, report: &Report) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *w, report)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
