// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-way digests of reference tokens.
//!
//! A digested reference lets a target be compared without storing the
//! literal reference text. The `<name>.md5` file keeps one entry per line:
//! `<hex>` for a positional token, `<key>\t<hex>` for a key/value pair.

use sha2::{Digest, Sha256};

use crate::filter::TokenSet;

/// Hex-encoded SHA-256 of a token.
pub fn digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Replace every value in `tokens` with its digest. Keys stay readable.
///
/// Duplicate pairs are carried over so they are still reported when the
/// digests are compared.
pub fn digest_tokens(tokens: &TokenSet) -> TokenSet {
    let mut digested = TokenSet::new();
    for value in tokens.positional() {
        digested.push_positional(digest(value));
    }
    for (key, value) in tokens.pairs().iter().chain(tokens.duplicates()) {
        digested.insert_pair(key.clone(), digest(value));
    }
    digested
}

/// Render a digested token set in the `.md5` file format.
pub fn render(digests: &TokenSet) -> String {
    let mut out = String::new();
    for hash in digests.positional() {
        out.push_str(hash);
        out.push('\n');
    }
    for (key, hash) in digests.pairs().iter().chain(digests.duplicates()) {
        out.push_str(key);
        out.push('\t');
        out.push_str(hash);
        out.push('\n');
    }
    out
}

/// Read a `.md5` file back into a digested token set.
///
/// Blank lines are ignored. A repeated key is recorded as a duplicate.
pub fn parse(content: &str) -> TokenSet {
    let mut digests = TokenSet::new();
    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        // keys may contain tabs, hex digests never do
        match line.rsplit_once('\t') {
            Some((key, hash)) => {
                digests.insert_pair(key, hash.trim());
            }
            None => digests.push_positional(line.trim()),
        }
    }
    digests
}

#[cfg(test)]
#[path = "digest_tests.rs"]
mod tests;
