// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-target files in a working directory.
//!
//! Each target `<name>` owns `<name>.out` (captured, filtered output),
//! `<name>.ref` (plaintext reference) and `<name>.md5` (digested
//! reference).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The kinds of per-target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Output,
    Reference,
    Digest,
}

impl ArtifactKind {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Output => "out",
            ArtifactKind::Reference => "ref",
            ArtifactKind::Digest => "md5",
        }
    }
}

/// Answers whether a target's file exists.
pub trait ArtifactProbe {
    fn exists(&self, name: &str, kind: ArtifactKind) -> bool;
}

/// Target files rooted at one working directory.
#[derive(Debug, Clone)]
pub struct Artifacts {
    dir: PathBuf,
}

impl Artifacts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name relative to the working directory, e.g. `demo1.out`.
    pub fn file_name(name: &str, kind: ArtifactKind) -> String {
        format!("{}.{}", name, kind.extension())
    }

    pub fn path(&self, name: &str, kind: ArtifactKind) -> PathBuf {
        self.dir.join(Self::file_name(name, kind))
    }

    /// Read a target file as lines, without line terminators.
    pub fn read_lines(&self, name: &str, kind: ArtifactKind) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(self.path(name, kind))?;
        Ok(content
            .lines()
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect())
    }

    pub fn read_to_string(&self, name: &str, kind: ArtifactKind) -> io::Result<String> {
        fs::read_to_string(self.path(name, kind))
    }

    /// Write lines, each terminated by a newline.
    pub fn write_lines<S: AsRef<str>>(
        &self,
        name: &str,
        kind: ArtifactKind,
        lines: &[S],
    ) -> io::Result<()> {
        let mut content = String::new();
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }
        fs::write(self.path(name, kind), content)
    }

    pub fn write_string(&self, name: &str, kind: ArtifactKind, content: &str) -> io::Result<()> {
        fs::write(self.path(name, kind), content)
    }

    /// Promote the captured output to the reference.
    pub fn validate(&self, name: &str) -> io::Result<u64> {
        fs::copy(
            self.path(name, ArtifactKind::Output),
            self.path(name, ArtifactKind::Reference),
        )
    }
}

impl ArtifactProbe for Artifacts {
    fn exists(&self, name: &str, kind: ArtifactKind) -> bool {
        self.path(name, kind).is_file()
    }
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod tests;
