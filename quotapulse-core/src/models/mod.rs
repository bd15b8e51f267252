//! Domain models for QuotaPulse.
//!
//! ## Submodules
//!
//! - [`reading`] - usage readings, meters, periods, provider snapshots
//! - [`window`] - billing windows
//! - [`level`] - usage-pace classification

mod level;
mod reading;
mod window;

pub use level::UsageLevel;
pub use reading::{ProviderUsage, UsageMeter, UsagePeriod, UsageReading};
pub use window::BillingWindow;
