//! Discord webhook delivery.

use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::error::ReportError;

/// Discord caps message content at 2000 characters.
const MAX_CONTENT_CHARS: usize = 2000;

/// Request timeout in seconds.
const TIMEOUT_SECS: u64 = 30;

/// Delivery sink posting the report to a Discord webhook.
///
/// One POST per run, no retry. Discord answers 204 No Content on
/// success; any other status is a delivery failure whose body gets
/// logged.
#[derive(Debug, Clone)]
pub struct DiscordWebhook {
    url: String,
    client: reqwest::Client,
}

impl DiscordWebhook {
    /// Creates a sink for the given webhook URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ReportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(concat!("quotapulse/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Posts the report text as the webhook's `content` field.
    ///
    /// Text past Discord's 2000-character cap is truncated with an
    /// ellipsis marker rather than bounced by the API.
    #[instrument(skip(self, text))]
    pub async fn deliver(&self, text: &str) -> Result<(), ReportError> {
        if text.is_empty() {
            return Err(ReportError::EmptyReport);
        }

        let content = truncate_content(text);
        debug!(chars = content.chars().count(), "Posting report to webhook");

        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "content": content }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Webhook delivery failed");
            return Err(ReportError::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        info!("Report delivered");
        Ok(())
    }
}

/// Truncates to Discord's content cap on a character boundary,
/// marking the cut with an ellipsis.
fn truncate_content(text: &str) -> String {
    if text.chars().count() <= MAX_CONTENT_CHARS {
        return text.to_string();
    }
    let mut content: String = text.chars().take(MAX_CONTENT_CHARS - 1).collect();
    content.push('…');
    content
}

// ============================================================================
// Tests
// ============================================================================
