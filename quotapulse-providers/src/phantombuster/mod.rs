//! PhantomBuster provider implementation.
//!
//! Execution-time metering via the org resources REST API. Daily and
//! monthly quotas reset independently; the API reports only the next
//! reset instant for each, so the window start is derived from the
//! nominal period length (24 hours, 30 days).

mod api;
mod fetcher;

pub use api::OrgResources;
pub use fetcher::PhantomBusterFetcher;
