//! Run command - fetch, assemble, deliver.

use anyhow::{Context, Result};
use quotapulse_report::{DiscordWebhook, ReportAssembler};
use tracing::info;

use crate::config::Config;
use crate::{Cli, ExitCode};

/// Runs the default command: fetch all configured providers,
/// assemble the report, post it to the webhook.
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

    let webhook_url = config
        .webhook_url
        .clone()
        .context("DISCORD_WEBHOOK_URL is not set")?;

    let assembler = ReportAssembler::new(sources);
    info!(providers = ?assembler.provider_names(), "Assembling report");

    let report = assembler.assemble().await;

    let webhook = DiscordWebhook::new(webhook_url)?;
    webhook.deliver(&report.text()).await?;

    Ok(())
}
