// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Working-directory discovery.
//!
//! Walks down from the invocation directory looking for oval.toml. A
//! directory holding one is a working directory and is not searched
//! further; hidden entries are skipped.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::CONFIG_FILE;

/// Find every working directory at or below `start_dir`, sorted by path.
///
/// Symbolic links are not followed.
pub fn find_workdirs(start_dir: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(start_dir)
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            // nothing below a working directory is searched
            let in_workdir = entry.depth() > 0
                && entry
                    .path()
                    .parent()
                    .is_some_and(is_workdir);
            is_dir && !in_workdir
        })
        .build();

    let mut found = Vec::new();
    for result in walker {
        match result {
            Ok(entry) if is_workdir(entry.path()) => found.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => tracing::debug!("skipping unreadable entry: {}", e),
        }
    }
    found.sort();
    found
}

fn is_workdir(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).is_file()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
