//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};

/// Praxis - demonstration CLI for idiomatic application structure
#[derive(Parser, Debug)]
#[command(name = "praxis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Say hello to someone
    Hello(HelloArgs),

    /// Show information about this project
    Info(InfoArgs),

    /// Show the resolved application settings
    Settings(SettingsArgs),
}

// Hello command
#[derive(Args, Debug)]
pub struct HelloArgs {
    /// Name to greet
    pub name: String,
}

// Info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Settings command
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
