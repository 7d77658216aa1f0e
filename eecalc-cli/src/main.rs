// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! eecalc CLI - heat pump installation cost estimates.
//!
//! # Examples
//!
//! ```bash
//! # Store the weather service API key (prompts when --key is omitted)
//! eecalc set-api-key
//!
//! # Estimate costs for a submission
//! eecalc calculate 4cb3820a-7bf6-47f9-8afc-3adcac8752cd
//!
//! # Show where settings live
//! eecalc config path
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{calculate, config, credentials};

// ============================================================================
// CLI Definition
// ============================================================================

/// eecalc CLI - heat pump cost estimator.
#[derive(Parser)]
#[command(name = "eecalc")]
#[command(about = "Evergreen Earth location efficiency calculator")]
#[command(long_about = r#"
Estimates the cost of installing a heat pump for a building submission.

The building's heat loss is combined with degree-day data from the weather
service to pick the smallest heat pump package that covers it.

Examples:
  eecalc set-api-key                 # Store the weather API key
  eecalc calculate <submission-id>   # Print the cost report
  eecalc config show                 # Show settings
"#)]
#[command(version)]
#[command(author = "Evergreen Earth")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (no logging, no error details).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Store the weather service API key in the system keychain.
    SetApiKey(credentials::SetApiKeyArgs),

    /// Remove the stored weather service API key.
    DeleteApiKey,

    /// Estimate heat pump costs for a submission.
    #[command(visible_alias = "calc")]
    Calculate(calculate::CalculateArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Submission id not in the dataset.
    SubmissionNotFound = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("eecalc=debug,info")
    } else {
        EnvFilter::new("eecalc=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::SetApiKey(args) => credentials::set(args).await.map(|()| ExitCode::Success),
        Commands::DeleteApiKey => credentials::delete().await.map(|()| ExitCode::Success),
        Commands::Calculate(args) => calculate::run(args).await,
        Commands::Config(args) => config::run(args).await.map(|()| ExitCode::Success),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::Error
        }
    };

    if code != ExitCode::Success {
        std::process::exit(code as i32);
    }

    Ok(())
}
