// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line filtering pipeline.
//!
//! Two passes share the same primitive of running an ordered list of
//! regular expressions over an ordered list of lines:
//! - exclusion drops every line matched by any filter (used before `.out`
//!   is written)
//! - extraction collects capture groups into a [`TokenSet`] (used before
//!   comparison)

use std::collections::HashMap;

use regex::Regex;

/// Error building a filter from its pattern.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("pattern has {groups} capture groups, expected 1 (positional) or 2 (key/value)")]
    GroupCount { groups: usize },
}

/// A filter whose matching lines are excluded from the persisted output.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    regex: Regex,
}

impl ExclusionFilter {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// A filter extracting comparison tokens.
///
/// The variant is fixed when the filter is built, from the number of
/// capture groups in its pattern.
#[derive(Debug, Clone)]
pub enum ExtractionFilter {
    /// One group, compared by position.
    Positional(Regex),
    /// Two groups: key then value, compared by key.
    KeyValue(Regex),
}

impl ExtractionFilter {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        let regex = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group
        match regex.captures_len() - 1 {
            1 => Ok(Self::Positional(regex)),
            2 => Ok(Self::KeyValue(regex)),
            groups => Err(FilterError::GroupCount { groups }),
        }
    }

    pub fn regex(&self) -> &Regex {
        match self {
            Self::Positional(regex) | Self::KeyValue(regex) => regex,
        }
    }

    pub fn is_key_value(&self) -> bool {
        matches!(self, Self::KeyValue(_))
    }
}

/// Tokens extracted from one source (live output or reference).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    positional: Vec<String>,
    pairs: Vec<(String, String)>,
    index: HashMap<String, usize>,
    duplicates: Vec<(String, String)>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_positional(&mut self, value: impl Into<String>) {
        self.positional.push(value.into());
    }

    /// Insert a key/value pair.
    ///
    /// A key seen before is recorded as a duplicate and the first value is
    /// kept. Returns false in that case.
    pub fn insert_pair(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains_key(&key) {
            self.duplicates.push((key, value.into()));
            return false;
        }
        self.index.insert(key.clone(), self.pairs.len());
        self.pairs.push((key, value.into()));
        true
    }

    /// Positional values in order of appearance.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Key/value pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.pairs[i].1.as_str())
    }

    /// Pairs whose key was already present, once per extra occurrence.
    pub fn duplicates(&self) -> &[(String, String)] {
        &self.duplicates
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.pairs.is_empty()
    }
}

/// Keep the lines that no exclusion filter matches, in their original order.
pub fn exclude<'a, S: AsRef<str>>(lines: &'a [S], filters: &[ExclusionFilter]) -> Vec<&'a str> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !filters.iter().any(|f| f.is_match(line)))
        .collect()
}

/// Run every extraction filter over every line and collect the groups.
///
/// All filters are tried on each line, so one line can feed several
/// filters. A group that did not participate in the match yields an empty
/// string.
pub fn extract<S: AsRef<str>>(lines: &[S], filters: &[ExtractionFilter]) -> TokenSet {
    let mut tokens = TokenSet::new();
    for line in lines.iter().map(AsRef::as_ref) {
        for filter in filters {
            let Some(caps) = filter.regex().captures(line) else {
                continue;
            };
            let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
            match filter {
                ExtractionFilter::Positional(_) => tokens.push_positional(group(1)),
                ExtractionFilter::KeyValue(_) => {
                    tokens.insert_pair(group(1), group(2));
                }
            }
        }
    }
    tokens
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
