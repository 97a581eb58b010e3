// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One action applied to the targets of one working directory.
//!
//! A job owns everything it touches: its configuration, its selection, its
//! files and its report. Nothing is shared between jobs, so they can run
//! in parallel.

use std::path::Path;

use anyhow::Context;

use crate::action::Action;
use crate::artifacts::{ArtifactKind, ArtifactProbe, Artifacts};
use crate::compare::{ReferenceKind, compare, compare_timing};
use crate::config::{self, CONFIG_FILE, Config};
use crate::digest;
use crate::filter::{TokenSet, exclude, extract};
use crate::process::run_command;
use crate::report::Report;
use crate::select::{Selection, select};
use crate::target::{Target, TimeMode};
use crate::timing::split_timing;

/// Report line for a target that passed its comparison.
pub const PASS_MARKER: &str = "==";

/// Report line for a filter command that extracted nothing.
pub const NO_MATCH: &str = "no match";

/// What a job is asked to do.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub action: Action,
    /// Target tokens from the command line, literal or wildcard.
    pub tokens: Vec<String>,
}

/// State of one directory job.
pub struct JobContext {
    config: Config,
    artifacts: Artifacts,
    selection: Selection,
    report: Report,
}

/// Run `spec` in `dir` and return its report.
///
/// `label` names the directory in the report; when set, the report starts
/// with a `===== <label>` header. A descriptor that cannot be loaded fails
/// this job only.
pub fn run_job(dir: &Path, label: Option<&str>, spec: &JobSpec) -> Report {
    let mut report = Report::new(label.unwrap_or("."));
    if let Some(label) = label {
        report.header(format!("===== {}", label));
    }

    let config = match config::load(&dir.join(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            report.fail();
            return report;
        }
    };

    let artifacts = Artifacts::new(dir);
    let selection = match select(
        &spec.tokens,
        &config.target_names(),
        spec.action.requirement(),
        &artifacts,
    ) {
        Ok(selection) => selection,
        Err(e) => {
            tracing::error!("{}", e);
            report.fail();
            return report;
        }
    };

    let mut ctx = JobContext {
        config,
        artifacts,
        selection,
        report,
    };
    ctx.execute(spec.action);
    ctx.report
}

impl JobContext {
    fn execute(&mut self, action: Action) {
        let names = self.selection.names.clone();
        for name in &names {
            let Some(target) = self.config.resolve(name) else {
                continue;
            };
            tracing::debug!("{} target {}", action.name(), name);
            if let Err(e) = self.apply(action, &target) {
                tracing::error!("{}: {:#}", name, e);
                self.report.fail();
            }
        }
    }

    fn apply(&mut self, action: Action, target: &Target) -> anyhow::Result<()> {
        match action {
            Action::List => {
                self.report
                    .line(format!("{}: {}", target.name, target.command));
                Ok(())
            }
            Action::Run => self.run(target).map(|_| ()),
            Action::Diff => self.diff(target),
            Action::RunDiff => {
                self.run(target)?;
                self.diff(target)
            }
            Action::Build => self.build(target),
            Action::Prod => {
                if self.run(target)? {
                    self.validate(target)
                } else {
                    tracing::warn!("{}: not validating a failed run", target.name);
                    Ok(())
                }
            }
            Action::Validate => self.validate(target),
            Action::Crypt => self.crypt(target),
            Action::FilterOut => self.show_tokens(target, ArtifactKind::Output),
            Action::FilterRef => self.show_tokens(target, ArtifactKind::Reference),
        }
    }

    fn prefix(&self, name: &str) -> String {
        if self.selection.prefixed() {
            format!("{}: ", name)
        } else {
            String::new()
        }
    }

    /// Execute the target, drop excluded lines and persist `.out`.
    ///
    /// Timing lines are split off the raw output first, so exclusion
    /// filters never see them, and are appended to `.out` unfiltered.
    /// Returns whether the command exited successfully.
    fn run(&mut self, target: &Target) -> anyhow::Result<bool> {
        let output = run_command(&target.command, self.artifacts.dir(), target.time_mode)
            .with_context(|| format!("failed to run `{}`", target.command))?;

        let timed = split_timing(&output.lines, target.time_mode);
        let kept = exclude(&timed.lines, &target.run_filters_out);
        let persisted: Vec<&str> = kept.iter().chain(&timed.timing).copied().collect();
        self.artifacts
            .write_lines(&target.name, ArtifactKind::Output, &persisted)
            .with_context(|| format!("failed to write {}.out", target.name))?;

        for line in &kept {
            if !self.selection.multi {
                self.report.line(*line);
            } else if target
                .diff_filters_in
                .iter()
                .any(|f| f.regex().is_match(line))
            {
                self.report.line(format!("{}: {}", target.name, line));
            }
        }

        if !output.success() {
            tracing::warn!("{}: command exited with {}", target.name, output.status);
            self.report.fail();
        }
        Ok(output.success())
    }

    /// Extract tokens from one of the target's files.
    ///
    /// Returns the tokens and the duration read from the timing lines.
    fn tokens_from(&self, target: &Target, kind: ArtifactKind) -> anyhow::Result<(TokenSet, f64)> {
        let lines = self
            .artifacts
            .read_lines(&target.name, kind)
            .with_context(|| format!("failed to read {}", Artifacts::file_name(&target.name, kind)))?;
        let timed = split_timing(&lines, target.time_mode);
        Ok((extract(&timed.lines, &target.diff_filters_in), timed.duration))
    }

    fn lacking(&self, target: &Target, kind: ArtifactKind) -> bool {
        if self.artifacts.exists(&target.name, kind) {
            return false;
        }
        tracing::warn!("lacking file {}", Artifacts::file_name(&target.name, kind));
        true
    }

    fn diff(&mut self, target: &Target) -> anyhow::Result<()> {
        if self.lacking(target, ArtifactKind::Output) {
            return Ok(());
        }
        let has_ref = self.artifacts.exists(&target.name, ArtifactKind::Reference);
        let has_digest = self.artifacts.exists(&target.name, ArtifactKind::Digest);
        if !has_ref && !has_digest {
            tracing::warn!("lacking file {0}.ref or {0}.md5", target.name);
            return Ok(());
        }

        let (current, duration) = self.tokens_from(target, ArtifactKind::Output)?;
        let (reference, reference_duration, kind) = if has_ref {
            let (tokens, secs) = self.tokens_from(target, ArtifactKind::Reference)?;
            (tokens, secs, ReferenceKind::Plain)
        } else {
            let content = self
                .artifacts
                .read_to_string(&target.name, ArtifactKind::Digest)
                .with_context(|| format!("failed to read {}.md5", target.name))?;
            (digest::parse(&content), 0.0, ReferenceKind::Digest)
        };

        let mut result = compare(&current, &reference, kind);
        if target.time_mode.is_active() {
            result.extend(compare_timing(duration, reference_duration));
        }

        let prefix = self.prefix(&target.name);
        if result.passed() {
            self.report.pass(format!("{}{}", prefix, PASS_MARKER));
        } else {
            for line in result.lines() {
                self.report.discrepancy(format!("{}{}", prefix, line));
            }
            self.report.fail();
        }
        Ok(())
    }

    fn build(&mut self, target: &Target) -> anyhow::Result<()> {
        let Some(command) = &target.build else {
            tracing::debug!("{}: no build step", target.name);
            return Ok(());
        };
        let output = run_command(command, self.artifacts.dir(), TimeMode::Off)
            .with_context(|| format!("failed to run `{}`", command))?;
        let prefix = self.prefix(&target.name);
        for line in &output.lines {
            self.report.line(format!("{}{}", prefix, line));
        }
        if !output.success() {
            tracing::warn!("{}: build exited with {}", target.name, output.status);
            self.report.fail();
        }
        Ok(())
    }

    fn validate(&mut self, target: &Target) -> anyhow::Result<()> {
        if self.lacking(target, ArtifactKind::Output) {
            return Ok(());
        }
        self.artifacts
            .validate(&target.name)
            .with_context(|| format!("failed to copy {0}.out to {0}.ref", target.name))?;
        self.report
            .line(format!("copied {0}.out to {0}.ref", target.name));
        Ok(())
    }

    fn crypt(&mut self, target: &Target) -> anyhow::Result<()> {
        if self.lacking(target, ArtifactKind::Reference) {
            return Ok(());
        }
        let (tokens, _) = self.tokens_from(target, ArtifactKind::Reference)?;
        let digests = digest::digest_tokens(&tokens);
        self.artifacts
            .write_string(&target.name, ArtifactKind::Digest, &digest::render(&digests))
            .with_context(|| format!("failed to write {}.md5", target.name))?;
        self.report
            .line(format!("crypting {0}.ref into {0}.md5", target.name));
        Ok(())
    }

    fn show_tokens(&mut self, target: &Target, kind: ArtifactKind) -> anyhow::Result<()> {
        if self.lacking(target, kind) {
            return Ok(());
        }
        let (tokens, _) = self.tokens_from(target, kind)?;
        let prefix = self.prefix(&target.name);
        if tokens.is_empty() {
            self.report.line(format!("{}{}", prefix, NO_MATCH));
            return Ok(());
        }
        for value in tokens.positional() {
            self.report.line(format!("{}{}", prefix, value));
        }
        for (key, value) in tokens.pairs() {
            self.report.line(format!("{}{} = {}", prefix, key, value));
        }
        Ok(())
    }
}

/// Directory label shown in reports: the path relative to `base`, or None
/// when `dir` is `base` itself.
pub fn dir_label(dir: &Path, base: &Path) -> Option<String> {
    if dir == base {
        return None;
    }
    let relative = dir.strip_prefix(base).unwrap_or(dir);
    Some(relative.display().to_string())
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
