//! Zapier provider implementation.
//!
//! Zapier meters tasks but exposes no public usage API, so usage is
//! read from the account usage page: a session-cookie GET plus text
//! extraction. The page structure is third-party and fragile, which is
//! exactly why this provider hides behind the same [`crate::UsageSource`]
//! interface as the REST fetchers.

mod fetcher;
mod parser;

pub use fetcher::ZapierFetcher;
pub use parser::parse_usage_page;
