//! PhantomBuster usage fetcher.

use async_trait::async_trait;
use quotapulse_core::ProviderUsage;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, instrument, warn};

use super::api::{OrgResources, DISPLAY_NAME};
use crate::client::HttpClient;
use crate::error::ProviderError;
use crate::source::UsageSource;

/// PhantomBuster API base URL.
const API_BASE: &str = "https://api.phantombuster.com";

/// Org resources endpoint.
const RESOURCES_ENDPOINT: &str = "/api/v2/orgs/fetch-resources";

/// API key header name.
const API_KEY_HEADER: &str = "X-Phantombuster-Key";

/// Fetches execution-time usage from the PhantomBuster API.
#[derive(Debug, Clone)]
pub struct PhantomBusterFetcher {
    api_key: String,
    base_url: String,
    client: HttpClient,
}

impl PhantomBusterFetcher {
    /// Creates a new fetcher for the given API key.
    pub fn new(api_key: impl Into<String>, client: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: API_BASE.to_string(),
            client,
        }
    }

    /// Overrides the API base URL. Test hook.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.api_key).map_err(|_| {
                ProviderError::MalformedResponse("API key contains invalid header bytes".into())
            })?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl UsageSource for PhantomBusterFetcher {
    fn name(&self) -> &str {
        DISPLAY_NAME
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> Result<ProviderUsage, ProviderError> {
        debug!("Fetching PhantomBuster org resources");

        let url = format!("{}{}", self.base_url, RESOURCES_ENDPOINT);
        let body = self.client.get_text(&url, self.build_headers()?).await?;

        let resources: OrgResources = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse resources response");
            ProviderError::MalformedResponse(format!("resources JSON: {e}"))
        })?;

        resources.to_usage()
    }
}

// ============================================================================
// Tests
// ============================================================================
