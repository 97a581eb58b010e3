// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison of extracted tokens against a reference.
//!
//! Positional tokens are compared either with a minimal line diff
//! (plaintext reference) or index by index (digested reference). Key/value
//! pairs are reconciled by key in both modes, and timed targets get a
//! relative tolerance check on their duration.

use std::fmt;

use crate::digest::digest;
use crate::filter::TokenSet;
use crate::timing::TIME_TOLERANCE;

/// How the reference tokens are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `<name>.ref`: literal tokens.
    Plain,
    /// `<name>.md5`: digested values.
    Digest,
}

/// Which side of the comparison a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Output,
    Reference,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Output => write!(f, "output"),
            Source::Reference => write!(f, "reference"),
        }
    }
}

/// One reported mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Discrepancy {
    /// Present in the reference, absent from the output.
    Removed(String),
    /// Present in the output, absent from the reference.
    Added(String),
    /// Output token whose digest differs from the stored one.
    DigestMismatch { current: String, stored: String },
    UnexpectedKey { key: String, value: String },
    MissingKey { key: String, value: String },
    ValueDiffers {
        key: String,
        reference: String,
        current: String,
    },
    DuplicateKey { key: String, source: Source },
    Timing { current: f64, reference: f64 },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::Removed(value) => write!(f, "- {}", value),
            Discrepancy::Added(value) => write!(f, "+ {}", value),
            Discrepancy::DigestMismatch { current, stored } => {
                write!(f, "digest(\"{}\") != {}", current, stored)
            }
            Discrepancy::UnexpectedKey { key, value } => {
                write!(f, "unexpected key {} = {}", key, value)
            }
            Discrepancy::MissingKey { key, value } => write!(f, "missing key {} = {}", key, value),
            Discrepancy::ValueDiffers {
                key,
                reference,
                current,
            } => write!(f, "value differs for {}: {} != {}", key, reference, current),
            Discrepancy::DuplicateKey { key, source } => {
                write!(f, "duplicate key {} in {}", key, source)
            }
            Discrepancy::Timing { current, reference } => write!(
                f,
                "time {:.2}s differs from reference {:.2}s by more than {:.0}%",
                current,
                reference,
                TIME_TOLERANCE * 100.0
            ),
        }
    }
}

/// Outcome of comparing one target. No discrepancies means it passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    discrepancies: Vec<Discrepancy>,
}

impl Comparison {
    pub fn count(&self) -> usize {
        self.discrepancies.len()
    }

    pub fn passed(&self) -> bool {
        self.discrepancies.is_empty()
    }

    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }

    pub fn push(&mut self, discrepancy: Discrepancy) {
        self.discrepancies.push(discrepancy);
    }

    /// Rendered discrepancy lines, in report order.
    pub fn lines(&self) -> Vec<String> {
        self.discrepancies.iter().map(ToString::to_string).collect()
    }
}

impl Extend<Discrepancy> for Comparison {
    fn extend<I: IntoIterator<Item = Discrepancy>>(&mut self, iter: I) {
        self.discrepancies.extend(iter);
    }
}

/// Compare the output tokens against the reference tokens.
///
/// With [`ReferenceKind::Digest`], `reference` holds digests as produced
/// by [`crate::digest::digest_tokens`].
pub fn compare(current: &TokenSet, reference: &TokenSet, kind: ReferenceKind) -> Comparison {
    let mut result = Comparison::default();
    result.extend(duplicates(current, Source::Output));
    result.extend(duplicates(reference, Source::Reference));
    match kind {
        ReferenceKind::Plain => {
            result.extend(compare_plain(reference.positional(), current.positional()))
        }
        ReferenceKind::Digest => {
            result.extend(compare_digests(current.positional(), reference.positional()))
        }
    }
    result.extend(reconcile_pairs(current, reference, kind));
    result
}

fn duplicates(tokens: &TokenSet, source: Source) -> impl Iterator<Item = Discrepancy> + '_ {
    tokens
        .duplicates()
        .iter()
        .map(move |(key, _)| Discrepancy::DuplicateKey {
            key: key.clone(),
            source,
        })
}

/// Minimal edit script between two token sequences.
///
/// Every element only in `reference` is reported as removed, every element
/// only in `current` as added.
pub fn compare_plain(reference: &[String], current: &[String]) -> Vec<Discrepancy> {
    diff::slice(reference, current)
        .into_iter()
        .filter_map(|step| match step {
            diff::Result::Left(value) => Some(Discrepancy::Removed(value.clone())),
            diff::Result::Right(value) => Some(Discrepancy::Added(value.clone())),
            diff::Result::Both(..) => None,
        })
        .collect()
}

/// Index-by-index comparison of output tokens against stored digests.
///
/// Surplus output tokens are reported as added and surplus digests as
/// removed, so sequences of different length never compare equal.
pub fn compare_digests(current: &[String], stored: &[String]) -> Vec<Discrepancy> {
    let mut found = Vec::new();
    for (value, hash) in current.iter().zip(stored) {
        if digest(value) != *hash {
            found.push(Discrepancy::DigestMismatch {
                current: value.clone(),
                stored: hash.clone(),
            });
        }
    }
    let common = current.len().min(stored.len());
    found.extend(current[common..].iter().cloned().map(Discrepancy::Added));
    found.extend(stored[common..].iter().cloned().map(Discrepancy::Removed));
    found
}

/// Reconcile key/value pairs by key.
///
/// Keys only in the output are unexpected, keys only in the reference are
/// missing, and shared keys must carry equal values (compared by digest
/// when the reference is digested).
pub fn reconcile_pairs(
    current: &TokenSet,
    reference: &TokenSet,
    kind: ReferenceKind,
) -> Vec<Discrepancy> {
    let mut found = Vec::new();
    for (key, value) in current.pairs() {
        match reference.get(key) {
            None => found.push(Discrepancy::UnexpectedKey {
                key: key.clone(),
                value: value.clone(),
            }),
            Some(expected) => {
                let same = match kind {
                    ReferenceKind::Plain => value == expected,
                    ReferenceKind::Digest => digest(value) == expected,
                };
                if !same {
                    found.push(Discrepancy::ValueDiffers {
                        key: key.clone(),
                        reference: expected.to_string(),
                        current: value.clone(),
                    });
                }
            }
        }
    }
    for (key, value) in reference.pairs() {
        if current.get(key).is_none() {
            found.push(Discrepancy::MissingKey {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    found
}

/// Check a duration against the reference with [`TIME_TOLERANCE`].
///
/// A reference of zero (no timing line recorded) is never checked.
pub fn compare_timing(current: f64, reference: f64) -> Option<Discrepancy> {
    if reference <= 0.0 {
        return None;
    }
    let deviation = (current - reference).abs() / reference;
    (deviation > TIME_TOLERANCE).then_some(Discrepancy::Timing { current, reference })
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
