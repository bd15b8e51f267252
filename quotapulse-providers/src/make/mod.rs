//! Make (formerly Integromat) provider implementation.
//!
//! Operations and data-transfer metering via the organizations REST
//! API. Both counters draw against one monthly window whose bounds the
//! API reports directly (lastReset/nextReset). The counters arrive as
//! string-encoded integers and are parsed explicitly.

mod api;
mod fetcher;

pub use api::{MakeOrganization, MakeOrganizationResponse};
pub use fetcher::{MakeFetcher, DEFAULT_ZONE};
