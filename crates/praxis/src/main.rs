//! Praxis CLI - demonstration of idiomatic command-line application structure
//!
//! This is the main entry point for the Praxis command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use praxis_core::{timing, Settings};

fn main() {
    if let Err(err) = run() {
        output::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Resolve settings from the environment
    let settings = Settings::from_env().context("Failed to resolve settings")?;

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet, &settings);

    let (result, elapsed) = timing::measure(|| run_command(cli.command, &settings));
    tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "command completed");

    result
}

/// Dispatch to the selected subcommand
fn run_command(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Hello(args) => commands::hello::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Settings(args) => commands::settings::run(args, settings),
    }
}

/// Initialize tracing with appropriate verbosity
///
/// The settings' log level is the baseline; -v/-vv raise it and --quiet
/// drops it to errors only.
fn init_tracing(verbose: u8, quiet: bool, settings: &Settings) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_new(&settings.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(settings.debug))
        .with(filter)
        .init();
}
