//! Providers command - list providers and configuration state.

use anyhow::Result;

use crate::config::Config;
use crate::Cli;

/// Prints the known providers and whether the current environment
/// configures each one.
pub fn run(_cli: &Cli) -> Result<()> {
    let config = Config::from_env();

    println!("{:<15} {}", "Provider", "Configured");
    for (name, configured) in config.provider_states() {
        let mark = if configured { "✓" } else { "−" };
        println!("{name:<15} {mark}");
    }

    if config.webhook_url.is_some() {
        println!("\nWebhook: configured");
    } else {
        println!("\nWebhook: not configured (DISCORD_WEBHOOK_URL)");
    }

    Ok(())
}
