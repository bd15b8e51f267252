//! Zapier usage fetcher.

use async_trait::async_trait;
use quotapulse_core::ProviderUsage;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use tracing::{debug, instrument};

use super::parser::{parse_usage_page, DISPLAY_NAME};
use crate::client::HttpClient;
use crate::error::ProviderError;
use crate::source::UsageSource;

/// Default account usage page.
const USAGE_PAGE: &str = "https://zapier.com/app/settings/plan";

/// Fetches task usage from the Zapier account usage page.
#[derive(Debug, Clone)]
pub struct ZapierFetcher {
    session_cookie: String,
    usage_url: String,
    client: HttpClient,
}

impl ZapierFetcher {
    /// Creates a new fetcher for the given browser session cookie.
    pub fn new(session_cookie: impl Into<String>, client: HttpClient) -> Self {
        Self {
            session_cookie: session_cookie.into(),
            usage_url: USAGE_PAGE.to_string(),
            client,
        }
    }

    /// Overrides the usage page URL. Also a test hook.
    pub fn with_usage_url(mut self, url: impl Into<String>) -> Self {
        self.usage_url = url.into();
        self
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&self.session_cookie).map_err(|_| {
                ProviderError::Scrape("session cookie contains invalid header bytes".into())
            })?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl UsageSource for ZapierFetcher {
    fn name(&self) -> &str {
        DISPLAY_NAME
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> Result<ProviderUsage, ProviderError> {
        debug!(url = %self.usage_url, "Fetching Zapier usage page");

        let page = self
            .client
            .get_text(&self.usage_url, self.build_headers()?)
            .await?;

        parse_usage_page(&page)
    }
}

// ============================================================================
// Tests
// ============================================================================
