//! Report error types.

use thiserror::Error;

/// Error type for report delivery.
#[derive(Debug, Error)]
pub enum ReportError {
    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("Webhook delivery failed with status {status}: {body}")]
    Delivery {
        /// HTTP status code.
        status: u16,
        /// Response body from the webhook.
        body: String,
    },

    /// There is nothing to deliver.
    #[error("Report is empty, nothing to deliver")]
    EmptyReport,
}
