//! Core error types for `QuotaPulse`.

use thiserror::Error;

/// Core error type for `QuotaPulse` domain operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value fell outside its valid domain.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
