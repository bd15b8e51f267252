//! Shared HTTP client.

use crate::error::ProviderError;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client shared by the provider fetchers.
///
/// A thin wrapper over `reqwest` that owns the timeout, user agent,
/// and status triage. Deliberately no retry loop: a failed fetch
/// degrades to an error section in the report instead.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quotapulse/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Performs a GET request and returns the response body.
    ///
    /// A non-success status becomes [`ProviderError::Status`] carrying
    /// the code and body so the failure text is self-describing.
    pub async fn get_text(&self, url: &str, headers: HeaderMap) -> Result<String, ProviderError> {
        debug!(url = %url, "Making GET request");

        let response = self.inner.get(url).headers(headers).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

// ============================================================================
// Tests
// ============================================================================
