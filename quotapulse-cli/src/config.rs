//! Environment-based configuration.
//!
//! All credentials live in process environment variables, read once
//! into an explicit struct that the commands thread through to the
//! fetchers and the webhook. Tests inject a fake lookup instead of
//! touching the real environment.

use quotapulse_providers::{
    HttpClient, MakeFetcher, PhantomBusterFetcher, ProviderError, UsageSource, ZapierFetcher,
};
use tracing::warn;

/// PhantomBuster credentials.
#[derive(Debug, Clone)]
pub struct PhantomBusterConfig {
    /// API key sent in the `X-Phantombuster-Key` header.
    pub api_key: String,
}

/// Make credentials.
#[derive(Debug, Clone)]
pub struct MakeConfig {
    /// API token for the organizations endpoint.
    pub api_token: String,
    /// Organization to report on.
    pub organization_id: String,
    /// API zone, e.g. `eu1`.
    pub zone: String,
}

/// Zapier session credentials.
#[derive(Debug, Clone)]
pub struct ZapierConfig {
    /// Browser session cookie for the usage page.
    pub session_cookie: String,
    /// Optional usage page override.
    pub usage_url: Option<String>,
}

/// Application configuration, resolved from the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// PhantomBuster provider, if configured.
    pub phantombuster: Option<PhantomBusterConfig>,
    /// Make provider, if configured.
    pub make: Option<MakeConfig>,
    /// Zapier provider, if configured.
    pub zapier: Option<ZapierConfig>,
    /// Discord webhook destination.
    pub webhook_url: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let phantombuster = lookup("PHANTOMBUSTER_API_KEY")
            .map(|api_key| PhantomBusterConfig { api_key });

        let make = match (lookup("MAKE_API_TOKEN"), lookup("MAKE_ORG_ID")) {
            (Some(api_token), Some(organization_id)) => Some(MakeConfig {
                api_token,
                organization_id,
                zone: lookup("MAKE_ZONE").unwrap_or_else(|| "eu1".to_string()),
            }),
            (None, None) => None,
            _ => {
                warn!("Make needs both MAKE_API_TOKEN and MAKE_ORG_ID; skipping provider");
                None
            }
        };

        let zapier = lookup("ZAPIER_SESSION_COOKIE").map(|session_cookie| ZapierConfig {
            session_cookie,
            usage_url: lookup("ZAPIER_USAGE_URL"),
        });

        Self {
            phantombuster,
            make,
            zapier,
            webhook_url: lookup("DISCORD_WEBHOOK_URL"),
        }
    }

    /// Builds the configured fetchers in fixed report order:
    /// PhantomBuster, Make, Zapier.
    pub fn build_sources(&self) -> Result<Vec<Box<dyn UsageSource>>, ProviderError> {
        let client = HttpClient::new()?;
        let mut sources: Vec<Box<dyn UsageSource>> = Vec::new();

        if let Some(pb) = &self.phantombuster {
            sources.push(Box::new(PhantomBusterFetcher::new(
                pb.api_key.clone(),
                client.clone(),
            )));
        }

        if let Some(make) = &self.make {
            sources.push(Box::new(MakeFetcher::new(
                make.api_token.clone(),
                make.organization_id.clone(),
                &make.zone,
                client.clone(),
            )));
        }

        if let Some(zapier) = &self.zapier {
            let mut fetcher = ZapierFetcher::new(zapier.session_cookie.clone(), client.clone());
            if let Some(url) = &zapier.usage_url {
                fetcher = fetcher.with_usage_url(url.clone());
            }
            sources.push(Box::new(fetcher));
        }

        Ok(sources)
    }

    /// Known providers with their configuration state, in report order.
    pub fn provider_states(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("PhantomBuster", self.phantombuster.is_some()),
            ("Make", self.make.is_some()),
            ("Zapier", self.zapier.is_some()),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
