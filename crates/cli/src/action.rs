// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand actions and their selection rules.

use crate::select::Requirement;

/// What to do with the selected targets of a working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Run,
    Diff,
    RunDiff,
    Build,
    Prod,
    Validate,
    Crypt,
    FilterOut,
    FilterRef,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Run => "run",
            Action::Diff => "diff",
            Action::RunDiff => "run-diff",
            Action::Build => "build",
            Action::Prod => "prod",
            Action::Validate => "validate",
            Action::Crypt => "crypt",
            Action::FilterOut => "filter-out",
            Action::FilterRef => "filter-ref",
        }
    }

    /// Artifacts a wildcard-expanded target must already have.
    pub fn requirement(self) -> Requirement {
        match self {
            Action::Diff => Requirement::Comparable,
            Action::Crypt => Requirement::Reference,
            Action::Validate => Requirement::Output,
            _ => Requirement::Nothing,
        }
    }

    /// Whether the action spawns target processes.
    ///
    /// Such actions run their directory jobs on the worker pool; the rest
    /// run sequentially.
    pub fn runs_processes(self) -> bool {
        matches!(
            self,
            Action::Run | Action::RunDiff | Action::Build | Action::Prod
        )
    }
}
