//! Provider error types.

use thiserror::Error;

/// Error type for provider fetch operations.
///
/// Every variant's display text is safe to drop verbatim into a
/// report section; the assembler does exactly that.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success transport status from the provider.
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for the report section.
        body: String,
    },

    /// A successful response was missing or mistyped an expected field.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Domain validation rejected the converted snapshot.
    #[error("Core error: {0}")]
    Core(#[from] quotapulse_core::CoreError),

    /// Usage-page text did not match the expected shape.
    #[error("Scrape failed: {0}")]
    Scrape(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_carries_code() {
        let err = ProviderError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("Internal Server Error"));
    }
}
