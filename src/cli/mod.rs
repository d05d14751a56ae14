//! The Attest Command-Line Interface.
//!
//! Loads fixture files named on the command line and runs each one as a
//! suite. Exit codes: 0 when every suite passed, 1 when any suite failed,
//! 2 when a fixture could not be loaded.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{AttestArgs, ColorMode, Command, ReportFormat};
use crate::errors::{AttestError, Result};
use crate::fixture::load_fixture;
use crate::output::{ReportConfig, StdoutSink};
use crate::suite::{RunResult, Runner, SuiteSummary};

pub mod args;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ATTEST_LOG";

const LOAD_FAILURE: u8 = 2;

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    init_logging();
    let args = AttestArgs::parse();

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command {
        Command::Run {
            files,
            color,
            format,
        } => handle_run(&files, color, format),
        Command::Check { files } => handle_check(&files),
    };

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            error!(kind = e.kind(), "aborting");
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(LOAD_FAILURE)
        }
    }
}

/// Installs a stderr subscriber filtered by `ATTEST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn report_config(color: ColorMode) -> ReportConfig {
    match color {
        ColorMode::Auto => ReportConfig::default(),
        ColorMode::Always => ReportConfig::colored(),
        ColorMode::Never => ReportConfig::plain(),
    }
}

/// Handles the `run` subcommand.
///
/// Every fixture is loaded before any suite runs, so a bad file aborts the
/// run without a partial report.
fn handle_run(files: &[PathBuf], color: ColorMode, format: ReportFormat) -> Result<RunResult> {
    let fixtures = files
        .iter()
        .map(|path| load_fixture(path))
        .collect::<Result<Vec<_>>>()?;

    match format {
        ReportFormat::Text => {
            let mut runner = Runner::new(StdoutSink::new(report_config(color)));
            for fixture in &fixtures {
                let result = runner.define(&fixture.suite, &fixture.evaluate());
                debug!(suite = %fixture.suite, failed = result.is_failure(), "suite reported");
            }
            info!(suites = runner.suites(), failed = runner.status().is_failure(), "run complete");
            Ok(runner.finish())
        }
        ReportFormat::Json => {
            let mut status = RunResult::SUCCESS;
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            for fixture in &fixtures {
                let summary = SuiteSummary::new(fixture.suite.as_str(), fixture.evaluate());
                status |= summary.run_result();
                let line = serde_json::to_string(&summary)
                    .map_err(|e| AttestError::Output { source: e.into() })?;
                writeln!(stdout, "{line}")?;
            }
            Ok(status)
        }
    }
}

/// Handles the `check` subcommand.
fn handle_check(files: &[PathBuf]) -> Result<RunResult> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for path in files {
        let fixture = load_fixture(path)?;
        writeln!(
            stdout,
            "{}: suite \"{}\" with {} tests, {} assertions",
            path.display(),
            fixture.suite,
            fixture.tests.len(),
            fixture.assertion_count()
        )?;
    }
    Ok(RunResult::SUCCESS)
}
