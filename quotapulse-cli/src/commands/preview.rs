//! Preview command - assemble and print, no delivery.

use anyhow::Result;
use quotapulse_report::ReportAssembler;
use tracing::info;

use crate::config::Config;
use crate::{Cli, ExitCode};

/// Assembles the report from the configured providers and prints it
/// to stdout. The webhook URL is not required.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env();

    let sources = config.build_sources()?;
    if sources.is_empty() {
        if !cli.quiet {
            eprintln!(
                "No providers configured. Set PHANTOMBUSTER_API_KEY, \
                 MAKE_API_TOKEN + MAKE_ORG_ID, or ZAPIER_SESSION_COOKIE."
            );
        }
        std::process::exit(ExitCode::NotConfigured as i32);
    }

    let assembler = ReportAssembler::new(sources);
    info!(providers = ?assembler.provider_names(), "Assembling report");

    let report = assembler.assemble().await;
    println!("{}", report.text());

    Ok(())
}
