// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `QuotaPulse` Providers
//!
//! One fetcher per monitored SaaS automation platform, all unified
//! behind the [`UsageSource`] trait so the report assembler is
//! agnostic to fetch mechanism:
//!
//! - [`phantombuster`] - execution-time metering REST API
//! - [`make`] - operations/transfer metering REST API
//! - [`zapier`] - task metering scraped from the account usage page
//!
//! Shared plumbing: [`HttpClient`] (timeouts, status triage) and
//! [`ProviderError`].

pub mod client;
pub mod error;
pub mod make;
pub mod phantombuster;
pub mod source;
pub mod zapier;

pub use client::HttpClient;
pub use error::ProviderError;
pub use make::MakeFetcher;
pub use phantombuster::PhantomBusterFetcher;
pub use source::UsageSource;
pub use zapier::ZapierFetcher;
