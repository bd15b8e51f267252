//! Make usage fetcher.

use async_trait::async_trait;
use quotapulse_core::ProviderUsage;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::{debug, instrument, warn};

use super::api::{MakeOrganizationResponse, DISPLAY_NAME};
use crate::client::HttpClient;
use crate::error::ProviderError;
use crate::source::UsageSource;

/// Default API zone.
pub const DEFAULT_ZONE: &str = "eu1";

/// Fetches operations/transfer usage from the Make API.
#[derive(Debug, Clone)]
pub struct MakeFetcher {
    api_token: String,
    organization_id: String,
    base_url: String,
    client: HttpClient,
}

impl MakeFetcher {
    /// Creates a new fetcher against the given zone
    /// (e.g. `eu1`, `us1`).
    pub fn new(
        api_token: impl Into<String>,
        organization_id: impl Into<String>,
        zone: &str,
        client: HttpClient,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            organization_id: organization_id.into(),
            base_url: format!("https://{zone}.make.com"),
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
        let auth = format!("Token {}", self.api_token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth).map_err(|_| {
                ProviderError::MalformedResponse("API token contains invalid header bytes".into())
            })?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl UsageSource for MakeFetcher {
    fn name(&self) -> &str {
        DISPLAY_NAME
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> Result<ProviderUsage, ProviderError> {
        debug!(org = %self.organization_id, "Fetching Make organization");

        let url = format!(
            "{}/api/v2/organizations/{}",
            self.base_url, self.organization_id
        );
        let body = self.client.get_text(&url, self.build_headers()?).await?;

        let response: MakeOrganizationResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse organization response");
            ProviderError::MalformedResponse(format!("organization JSON: {e}"))
        })?;

        response.organization.to_usage()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(server: &MockServer) -> MakeFetcher {
        MakeFetcher::new("make-token", "123", DEFAULT_ZONE, HttpClient::new().unwrap())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/123"))
            .and(header("authorization", "Token make-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{
                    "organization": {
                        "operations": "4000",
                        "transfer": "536870912",
                        "license": {"operations": 10000, "transfer": 1073741824},
                        "lastReset": "2024-03-01T00:00:00.000Z",
                        "nextReset": "2024-04-01T00:00:00.000Z"
                    }
                }"#,
            ))
            .mount(&server)
            .await;

        let usage = fetcher(&server).fetch().await.unwrap();
        assert_eq!(usage.provider, "Make");
        assert_eq!(usage.periods[0].meters.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_unauthorized_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/123"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Access denied"))
            .mount(&server)
            .await;

        let err = fetcher(&server).fetch().await.unwrap_err();
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Access denied"));
    }
}
