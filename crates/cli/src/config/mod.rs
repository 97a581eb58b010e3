// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Working-directory configuration (`oval.toml`).
//!
//! Declares the targets of a directory and the two filter lists. Each
//! filter carries an `apply` name pattern selecting the targets it is
//! attached to.
//!
//! ```toml
//! [[targets]]
//! name = "keys"
//! command = "echo A = 1 && echo B = 20"
//!
//! [[diff_filters_in]]
//! re = '^(\w+) = (.*)$'
//! apply = "keys"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::filter::{ExclusionFilter, ExtractionFilter, FilterError};
use crate::pattern::{NamePattern, PatternError};
use crate::target::{Target, TimeMode};

/// Name of the per-directory configuration file.
pub const CONFIG_FILE: &str = "oval.toml";

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}: duplicate target name '{name}'", .path.display())]
    DuplicateTarget { path: PathBuf, name: String },

    #[error("{}: target with empty name", .path.display())]
    EmptyTargetName { path: PathBuf },

    #[error("{}: filter '{filter}': {source}", .path.display())]
    Filter {
        path: PathBuf,
        filter: String,
        #[source]
        source: FilterError,
    },

    #[error("{}: filter '{filter}': {source}", .path.display())]
    Apply {
        path: PathBuf,
        filter: String,
        #[source]
        source: PatternError,
    },
}

/// A target as declared in the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSpec {
    pub name: String,
    pub command: String,

    /// Timing line compared against the reference: off, real or user.
    #[serde(default, rename = "time")]
    pub time_mode: TimeMode,

    /// Build step run by `oval build`.
    #[serde(default)]
    pub build: Option<String>,
}

/// A filter as declared in the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSpec {
    /// Informational name, used in error messages.
    #[serde(default)]
    pub name: Option<String>,

    /// Regular expression, used as written.
    pub re: String,

    /// Target name pattern the filter is attached to (default: all).
    #[serde(default = "FilterSpec::default_apply")]
    pub apply: String,
}

impl FilterSpec {
    fn default_apply() -> String {
        "%".to_string()
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.re.clone())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    targets: Vec<TargetSpec>,
    #[serde(default)]
    run_filters_out: Vec<FilterSpec>,
    #[serde(default)]
    diff_filters_in: Vec<FilterSpec>,
}

/// A compiled filter with the name pattern selecting its targets.
#[derive(Debug, Clone)]
struct Attached<F> {
    applies_to: NamePattern,
    filter: F,
}

/// A loaded and validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    targets: Vec<TargetSpec>,
    run_filters_out: Vec<Attached<ExclusionFilter>>,
    diff_filters_in: Vec<Attached<ExtractionFilter>>,
}

impl Config {
    /// Declared targets, in file order.
    pub fn targets(&self) -> &[TargetSpec] {
        &self.targets
    }

    /// Registered target names, in file order.
    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }

    /// Build the target `name` with every filter whose `apply` pattern
    /// matches it, in declaration order.
    pub fn resolve(&self, name: &str) -> Option<Target> {
        let spec = self.targets.iter().find(|t| t.name == name)?;
        Some(Target {
            name: spec.name.clone(),
            command: spec.command.clone(),
            build: spec.build.clone(),
            time_mode: spec.time_mode,
            run_filters_out: attached_to(&self.run_filters_out, name),
            diff_filters_in: attached_to(&self.diff_filters_in, name),
        })
    }
}

fn attached_to<F: Clone>(filters: &[Attached<F>], name: &str) -> Vec<F> {
    filters
        .iter()
        .filter(|a| a.applies_to.is_match(name))
        .map(|a| a.filter.clone())
        .collect()
}

/// Load and validate a configuration file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse configuration content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for target in &raw.targets {
        if target.name.is_empty() {
            return Err(ConfigError::EmptyTargetName {
                path: path.to_path_buf(),
            });
        }
        if !seen.insert(target.name.as_str()) {
            return Err(ConfigError::DuplicateTarget {
                path: path.to_path_buf(),
                name: target.name.clone(),
            });
        }
    }

    let run_filters_out = compile(&raw.run_filters_out, path, ExclusionFilter::new)?;
    let diff_filters_in = compile(&raw.diff_filters_in, path, ExtractionFilter::new)?;

    Ok(Config {
        targets: raw.targets,
        run_filters_out,
        diff_filters_in,
    })
}

fn compile<F>(
    specs: &[FilterSpec],
    path: &Path,
    build: impl Fn(&str) -> Result<F, FilterError>,
) -> Result<Vec<Attached<F>>, ConfigError> {
    specs
        .iter()
        .map(|spec| {
            let filter = build(&spec.re).map_err(|source| ConfigError::Filter {
                path: path.to_path_buf(),
                filter: spec.label(),
                source,
            })?;
            let applies_to = NamePattern::new(&spec.apply).map_err(|source| ConfigError::Apply {
                path: path.to_path_buf(),
                filter: spec.label(),
                source,
            })?;
            Ok(Attached { applies_to, filter })
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
