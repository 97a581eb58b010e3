// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target selection.
//!
//! Expands the target tokens given on the command line into concrete
//! target names. Literal tokens must name a known target; wildcard tokens
//! are matched against every registered name and, for actions that work
//! on existing files, only expand to targets that have them.

use std::collections::HashSet;

use crate::artifacts::{ArtifactKind, ArtifactProbe};
use crate::pattern::{NamePattern, PatternError};

/// Files a wildcard-expanded target must have to be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Every matching name is selected.
    Nothing,
    /// `.out` and either `.ref` or `.md5`.
    Comparable,
    /// `.ref`.
    Reference,
    /// `.out`.
    Output,
}

impl Requirement {
    pub fn is_met(self, name: &str, probe: &dyn ArtifactProbe) -> bool {
        match self {
            Requirement::Nothing => true,
            Requirement::Comparable => {
                probe.exists(name, ArtifactKind::Output)
                    && (probe.exists(name, ArtifactKind::Reference)
                        || probe.exists(name, ArtifactKind::Digest))
            }
            Requirement::Reference => probe.exists(name, ArtifactKind::Reference),
            Requirement::Output => probe.exists(name, ArtifactKind::Output),
        }
    }
}

/// Selected target names, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub names: Vec<String>,
    /// More than one target was selected.
    pub multi: bool,
    /// At least one token was a wildcard pattern.
    pub expanded: bool,
    /// Literal tokens that named no target.
    pub unknown: Vec<String>,
}

impl Selection {
    /// Whether report lines should carry the target name.
    pub fn prefixed(&self) -> bool {
        self.multi || self.expanded
    }
}

/// Expand `tokens` against the registered target `names`.
///
/// An unknown literal is a warning, never an error; the remaining tokens
/// are still processed.
pub fn select(
    tokens: &[String],
    names: &[&str],
    requirement: Requirement,
    probe: &dyn ArtifactProbe,
) -> Result<Selection, PatternError> {
    let mut chosen: HashSet<&str> = HashSet::new();
    let mut selection = Selection::default();

    for token in tokens {
        let pattern = NamePattern::new(token)?;
        if pattern.is_literal() {
            if names.contains(&token.as_str()) {
                chosen.insert(token.as_str());
            } else {
                tracing::warn!("unknown target {}", token);
                selection.unknown.push(token.clone());
            }
            continue;
        }

        selection.expanded = true;
        for &name in names {
            if pattern.is_match(name) && requirement.is_met(name, probe) {
                tracing::debug!("expand {} to {}", token, name);
                chosen.insert(name);
            }
        }
    }

    selection.names = names
        .iter()
        .filter(|name| chosen.contains(*name))
        .map(|name| name.to_string())
        .collect();
    selection.multi = selection.names.len() > 1;
    tracing::debug!("targets: {:?}", selection.names);
    Ok(selection)
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
