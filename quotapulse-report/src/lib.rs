// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `QuotaPulse` Report
//!
//! Turns provider usage snapshots into one text report and delivers
//! it to a Discord webhook.
//!
//! - [`ReportAssembler`] - fetches each source in fixed order and
//!   builds titled sections; a failed provider degrades to its error
//!   text instead of suppressing the rest
//! - [`DiscordWebhook`] - posts the assembled text as a single
//!   `content` payload

pub mod assembler;
pub mod error;
pub mod webhook;

pub use assembler::{render_section, Report, ReportAssembler};
pub use error::ReportError;
pub use webhook::DiscordWebhook;
