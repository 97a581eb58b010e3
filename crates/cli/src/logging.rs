// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging.
//!
//! Warnings and errors go to stderr through `tracing`; `--verbose` adds
//! debug events there. Every event, debug included, is also written to a
//! log file (`.oval.log` by default) in the invocation directory.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Default log file name, relative to the invocation directory.
pub const DEFAULT_LOG_FILE: &str = ".oval.log";

const DEFAULT_CONSOLE_FILTER: &str = "oval=info";
const VERBOSE_CONSOLE_FILTER: &str = "oval=debug";

/// Logging setup for one invocation.
pub struct LogConfig {
    pub verbose: bool,
    /// Log file path, or None to skip the file.
    pub log_file: Option<PathBuf>,
}

fn console_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_CONSOLE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER))
    }
}

/// Install the global subscriber.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .with_filter(console_filter(config.verbose)),
        )
        .with(file_layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
