// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory job runner with error isolation.
//!
//! Actions that spawn target processes run their directory jobs in
//! parallel on a bounded rayon pool; the others run one directory after
//! the other. A job that panics is reported as failed without affecting
//! the other jobs.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::job::{JobSpec, dir_label, run_job};
use crate::report::Report;

/// Default number of concurrent directory jobs.
pub const DEFAULT_JOBS: usize = 10;

/// Configuration for the job runner.
pub struct RunnerConfig {
    /// Maximum concurrent directory jobs.
    pub jobs: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { jobs: DEFAULT_JOBS }
    }
}

/// Aggregated outcome of all jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub jobs: usize,
    pub failed: usize,
}

/// The job runner executes one job per working directory.
pub struct JobRunner {
    config: RunnerConfig,
}

impl JobRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run `spec` in every directory of `workdirs`.
    ///
    /// `emit` receives each report as soon as its job ends; it is called
    /// from worker threads when jobs run in parallel. Returns only after
    /// every job has finished.
    pub fn run(
        &self,
        workdirs: &[PathBuf],
        base: &Path,
        spec: &JobSpec,
        emit: &(dyn Fn(&Report) + Sync),
    ) -> anyhow::Result<Outcome> {
        let run_one = |dir: &PathBuf| {
            let label = dir_label(dir, base);
            let report = isolated(dir, label.as_deref(), spec);
            emit(&report);
            report.failed
        };

        let failures: Vec<bool> = if spec.action.runs_processes() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.jobs.max(1))
                .build()?;
            pool.install(|| workdirs.par_iter().map(run_one).collect())
        } else {
            workdirs.iter().map(run_one).collect()
        };

        Ok(Outcome {
            jobs: failures.len(),
            failed: failures.iter().filter(|&&failed| failed).count(),
        })
    }
}

/// Run a job, turning a panic into a failed report.
fn isolated(dir: &Path, label: Option<&str>, spec: &JobSpec) -> Report {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_job(dir, label, spec))) {
        Ok(report) => report,
        Err(_) => {
            tracing::error!("internal error: job for {} panicked", dir.display());
            let mut report = Report::new(label.unwrap_or("."));
            report.fail();
            report
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
