// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use termcolor::StandardStream;

use oval::cli::Cli;
use oval::discovery::find_workdirs;
use oval::error::ExitCode;
use oval::job::JobSpec;
use oval::logging::{self, LogConfig};
use oval::report::{self, OutputFormat, Report};
use oval::runner::{JobRunner, RunnerConfig};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("oval: {:#}", e);
            ExitCode::InternalError.into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    logging::init(&LogConfig {
        verbose: cli.verbose,
        log_file: (!cli.no_log_file).then(|| cli.log_file.clone()),
    })?;

    let cwd = std::env::current_dir()?;
    let workdirs = find_workdirs(&cwd);
    if workdirs.is_empty() {
        tracing::warn!("no oval.toml found under {}", cwd.display());
        return Ok(ExitCode::Success);
    }
    tracing::debug!("{} working directories", workdirs.len());

    let spec = JobSpec {
        action: cli.command.action(),
        tokens: cli.command.targets().to_vec(),
    };

    // Stdout stays locked for a whole report so parallel jobs never interleave.
    let choice = cli.color.choice(cli.no_color);
    let format = cli.output;
    let emit = |report: &Report| {
        let written = match format {
            OutputFormat::Text => {
                let out = StandardStream::stdout(choice);
                let mut out = out.lock();
                report::write_text(&mut out, report).map_err(anyhow::Error::from)
            }
            OutputFormat::Json => {
                let out = std::io::stdout();
                let mut out = out.lock();
                report::write_json(&mut out, report)
            }
        };
        if let Err(e) = written {
            tracing::error!("failed to write report: {:#}", e);
        }
    };

    let runner = JobRunner::new(RunnerConfig { jobs: cli.jobs });
    let outcome = runner.run(&workdirs, &cwd, &spec, &emit)?;
    tracing::debug!("{} of {} jobs failed", outcome.failed, outcome.jobs);

    Ok(ExitCode::from_failures(outcome.failed))
}
