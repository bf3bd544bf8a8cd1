//! srch CLI - line-oriented regex search with match annotation.
//!
//! This is the entry point for the `srch` binary. It parses arguments,
//! initializes logging, resolves the wrap width from the terminal, and
//! hands the assembled configuration to the scan pipeline in
//! `srch-core`. All search and rendering logic lives in the library.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use srch_core::{DEFAULT_WRAP_WIDTH, Error, SearchConfig, Source};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

use cli::Cli;

/// Exit status for usage problems, matching clap's own convention.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = initialize_logging(&cli) {
        eprintln!("srch: {err}");
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Pattern(_)) => {
            eprintln!("srch: {err}");
            ExitCode::from(EXIT_USAGE)
        },
        Err(Error::Unreadable { .. }) => {
            // The scan already wrote its diagnostic to stdout.
            ExitCode::FAILURE
        },
        Err(err) => {
            eprintln!("srch: {err}");
            ExitCode::FAILURE
        },
    }
}

/// Assemble the configuration and sources, then run the scan against
/// locked stdout.
fn execute(cli: &Cli) -> srch_core::Result<()> {
    let config = SearchConfig::new(&cli.pattern)?
        .with_underscore(cli.underscore)
        .with_color(cli.color)
        .with_machine(cli.machine)
        .with_wrap_width(cli.width.unwrap_or_else(detect_width));

    let sources: Vec<Source> = if cli.files.is_empty() {
        vec![Source::Stdin]
    } else {
        cli.files.iter().map(|f| Source::from_arg(f)).collect()
    };

    tracing::debug!(
        sources = sources.len(),
        wrap_width = config.wrap_width,
        "starting scan"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    srch_core::run(&sources, &config, &mut out)
}

/// Current terminal column count, or the historical fallback of 80.
fn detect_width() -> usize {
    terminal_size::terminal_size().map_or(DEFAULT_WRAP_WIDTH, |(width, _)| {
        usize::from(width.0.max(1))
    })
}

/// Initialize the logging subsystem based on CLI flags.
///
/// Logs go to stderr so they never interleave with result records on
/// stdout.
fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
