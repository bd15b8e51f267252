// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `QuotaPulse` Core
//!
//! Pure domain logic for the `QuotaPulse` quota monitor: percentage
//! arithmetic, billing windows, usage-pace classification, and bar
//! rendering. No I/O lives here; provider fetching and report delivery
//! are in the `quotapulse-providers` and `quotapulse-report` crates.
//!
//! ## Key Types
//!
//! - [`UsageReading`] - one used/limit metric snapshot
//! - [`BillingWindow`] - a quota reset period with elapsed-time math
//! - [`UsageLevel`] - Ok/Warning/Critical pace classification
//! - [`ProviderUsage`] - one provider's structured readings
//! - [`render_bar`] - fixed-width textual progress bar

pub mod bar;
pub mod error;
pub mod models;
pub mod percent;

pub use bar::{render_bar, BAR_WIDTH};
pub use error::CoreError;
pub use models::{BillingWindow, ProviderUsage, UsageLevel, UsageMeter, UsagePeriod, UsageReading};
pub use percent::{ratio_percentage, time_window_percentage};
