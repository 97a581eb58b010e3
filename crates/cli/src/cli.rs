// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::action::Action;
use crate::color::ColorMode;
use crate::logging::DEFAULT_LOG_FILE;
use crate::report::OutputFormat;
use crate::runner::DEFAULT_JOBS;

/// Automatic running and diffing of executables
#[derive(Parser)]
#[command(name = "oval")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show debug messages on the console
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Maximum directories processed in parallel by run-like subcommands
    #[arg(
        short = 'j',
        long,
        global = true,
        env = "OVAL_JOBS",
        default_value_t = DEFAULT_JOBS,
        value_name = "N"
    )]
    pub jobs: usize,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Write the detailed log to this file
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE, value_name = "PATH")]
    pub log_file: PathBuf,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List targets and their commands
    #[command(visible_alias = "l", aliases = ["li", "lis"])]
    List(TargetArgs),
    /// Run targets and store their filtered output in <name>.out
    #[command(visible_alias = "r", aliases = ["ru"])]
    Run(TargetArgs),
    /// Compare <name>.out against <name>.ref or <name>.md5
    #[command(visible_alias = "d", aliases = ["di", "dif"])]
    Diff(TargetArgs),
    /// Run targets, then compare them
    #[command(visible_alias = "rd")]
    RunDiff(TargetArgs),
    /// Run the build step of targets that declare one
    #[command(visible_alias = "b")]
    Build(TargetArgs),
    /// Run targets, then promote their output to reference
    #[command(visible_alias = "p")]
    Prod(TargetArgs),
    /// Copy <name>.out to <name>.ref
    #[command(visible_alias = "v", aliases = ["va", "val"])]
    Validate(TargetArgs),
    /// Write digests of the reference tokens to <name>.md5
    #[command(visible_alias = "digest", aliases = ["c", "cr", "cry", "cryp"])]
    Crypt(TargetArgs),
    /// Show the tokens extracted from <name>.out
    #[command(visible_alias = "fo")]
    FilterOut(TargetArgs),
    /// Show the tokens extracted from <name>.ref
    #[command(visible_alias = "fr")]
    FilterRef(TargetArgs),
}

#[derive(clap::Args)]
pub struct TargetArgs {
    /// Target names; `%` matches any sequence of characters
    #[arg(value_name = "TARGET", default_value = "%")]
    pub targets: Vec<String>,
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Command::List(_) => Action::List,
            Command::Run(_) => Action::Run,
            Command::Diff(_) => Action::Diff,
            Command::RunDiff(_) => Action::RunDiff,
            Command::Build(_) => Action::Build,
            Command::Prod(_) => Action::Prod,
            Command::Validate(_) => Action::Validate,
            Command::Crypt(_) => Action::Crypt,
            Command::FilterOut(_) => Action::FilterOut,
            Command::FilterRef(_) => Action::FilterRef,
        }
    }

    pub fn targets(&self) -> &[String] {
        match self {
            Command::List(args)
            | Command::Run(args)
            | Command::Diff(args)
            | Command::RunDiff(args)
            | Command::Build(args)
            | Command::Prod(args)
            | Command::Validate(args)
            | Command::Crypt(args)
            | Command::FilterOut(args)
            | Command::FilterRef(args) => &args.targets,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
