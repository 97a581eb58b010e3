// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target-name patterns.
//!
//! Target names on the command line and the `apply` field of filters are
//! globs with a single wildcard character, `%`, standing for zero or more
//! arbitrary characters. Every other character is literal and the pattern
//! is anchored at both ends.

pub mod wildcard;

pub use wildcard::{NamePattern, PatternError, WILDCARD, has_wildcard};
