// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! QuotaPulse CLI - SaaS automation quota monitoring.
//!
//! # Examples
//!
//! ```bash
//! # Fetch all configured providers and post the report to Discord
//! quotapulse
//!
//! # Print the report to stdout without delivering it
//! quotapulse preview
//!
//! # Show which providers the current environment configures
//! quotapulse providers
//! ```

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{preview, providers, run};

// ============================================================================
// CLI Definition
// ============================================================================

/// QuotaPulse CLI - automation platform quota monitoring.
#[derive(Parser)]
#[command(name = "quotapulse")]
#[command(about = "SaaS automation quota monitoring with Discord delivery")]
#[command(long_about = r#"
QuotaPulse polls usage quotas from automation platforms and posts a
formatted summary to a Discord webhook.

Monitored providers:
  • PhantomBuster (execution time, daily + monthly)
  • Make (operations + transfer, monthly)
  • Zapier (tasks, scraped from the usage page)

Configuration is read from the environment: PHANTOMBUSTER_API_KEY,
MAKE_API_TOKEN + MAKE_ORG_ID (+ optional MAKE_ZONE),
ZAPIER_SESSION_COOKIE (+ optional ZAPIER_USAGE_URL), and
DISCORD_WEBHOOK_URL.

Examples:
  quotapulse            # fetch, assemble, deliver
  quotapulse preview    # print the report, skip delivery
  quotapulse providers  # list providers and configuration state
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'run' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch usage and deliver the report (default if no command).
    #[command(visible_alias = "r")]
    Run,

    /// Assemble the report and print it without delivering.
    #[command(visible_alias = "p")]
    Preview,

    /// List known providers and whether each is configured.
    Providers,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// No provider is configured in the environment.
    NotConfigured = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("quotapulse=debug,info")
    } else {
        EnvFilter::new("quotapulse=warn")
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
        Some(Commands::Preview) => preview::run(&cli).await,
        Some(Commands::Providers) => providers::run(&cli),
        Some(Commands::Run) | None => run::run(&cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
