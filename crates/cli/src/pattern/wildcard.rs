// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard glob compilation.

use regex::Regex;

/// The only metacharacter recognized in target-name patterns.
pub const WILDCARD: char = '%';

/// Error compiling a name pattern.
#[derive(Debug, thiserror::Error)]
#[error("invalid name pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Returns true if the pattern contains at least one wildcard.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(WILDCARD)
}

/// A compiled, fully anchored name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// Compile a pattern. `%` becomes `.*`, everything else is escaped.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let body = pattern
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("(?s)^{}$", body)).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Check whether `name` matches the whole pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when the pattern has no wildcard and only matches itself.
    pub fn is_literal(&self) -> bool {
        !has_wildcard(&self.source)
    }
}

#[cfg(test)]
#[path = "wildcard_tests.rs"]
mod tests;
