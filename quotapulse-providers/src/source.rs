//! The provider-agnostic fetch interface.

use async_trait::async_trait;
use quotapulse_core::ProviderUsage;

use crate::error::ProviderError;

/// A source of usage readings for one provider.
///
/// REST fetchers and page scrapers implement the same interface, so
/// the report assembler never knows how a reading was obtained. A
/// fetch is a single attempt: no retries, no fallback strategies.
#[async_trait]
pub trait UsageSource: Send + Sync {
    /// Provider display name, used for section titles and logs.
    fn name(&self) -> &str;

    /// Fetches the current usage snapshot.
    async fn fetch(&self) -> Result<ProviderUsage, ProviderError>;
}
