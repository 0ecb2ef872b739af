//! Tailrisk CLI - Portfolio risk statistics from simulated daily returns.
//!
//! # Usage
//!
//! ```bash
//! # Reference run: seed 42, three assets, 252 days, 5% significance
//! tailrisk report
//!
//! # Override the run from the command line
//! tailrisk report --seed 7 --significance 0.01 --notional 1000000
//!
//! # Run from a configuration file, JSON output
//! tailrisk --format json report --config run.toml
//!
//! # Inspect and validate configurations
//! tailrisk config show
//! tailrisk config validate run.toml
//! ```

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = parse_args();

    init_tracing(cli.verbose);

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Some(Commands::Report(args)) => commands::report::execute(args, format, quiet)?,
        Some(Commands::Config(args)) => commands::config::execute(args, format, quiet)?,
        None => anyhow::bail!("no command given"),
    }

    Ok(())
}

/// A bare `tailrisk` is parsed as `tailrisk report`, so report flags read
/// from the environment apply to both forms.
fn parse_args() -> Cli {
    let cli = Cli::parse();
    if cli.command.is_some() {
        return cli;
    }
    Cli::parse_from(std::env::args_os().chain(std::iter::once(OsString::from("report"))))
}

/// Logs go to stderr so report output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
