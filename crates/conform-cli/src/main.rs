//! # conform CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use conform_cli::check::{run_check, CheckArgs};
use conform_cli::defaults::{run_defaults, DefaultsArgs};
use conform_cli::fmt::{run_fmt, FmtArgs};

/// conform — schema validation for configuration documents.
///
/// Validates JSON-with-comments configuration files against schemas,
/// repairs type mismatches through coercion (always surfaced as
/// warnings), reformats recovered documents, and prints schema defaults.
#[derive(Parser, Debug)]
#[command(name = "conform", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a configuration document against a schema.
    Check(CheckArgs),

    /// Reformat a document as clean, indented JSON.
    Fmt(FmtArgs),

    /// Print the default document a schema describes.
    Defaults(DefaultsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Fmt(args) => run_fmt(&args),
        Commands::Defaults(args) => run_defaults(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
