// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Oval: run named shell commands and compare their filtered output
//! against stored references.

pub mod action;
pub mod artifacts;
pub mod cli;
pub mod color;
pub mod compare;
pub mod config;
pub mod digest;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod job;
pub mod logging;
pub mod pattern;
pub mod process;
pub mod report;
pub mod runner;
pub mod select;
pub mod target;
pub mod timing;

#[cfg(test)]
mod test_utils;
