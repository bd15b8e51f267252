//! Usage readings and provider snapshots.

use serde::{Deserialize, Serialize};

use super::level::UsageLevel;
use super::window::BillingWindow;
use crate::error::CoreError;
use crate::percent::ratio_percentage;

/// One metric snapshot: amount consumed against a quota limit.
///
/// Invariant: `limit >= 0`. A zero limit (unlimited or unknown plans)
/// yields a 0% reading rather than a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageReading {
    /// Amount of quota consumed, in provider-specific units.
    pub used: f64,
    /// Quota limit in the same units.
    pub limit: f64,
}

impl UsageReading {
    /// Creates a new reading.
    pub fn new(used: f64, limit: f64) -> Self {
        Self { used, limit }
    }

    /// Consumed share of the quota as a percentage.
    ///
    /// Can exceed 100 when usage has overrun the limit.
    pub fn percent(&self) -> f64 {
        ratio_percentage(self.used, self.limit)
    }

    /// Validates the reading against its invariants.
    ///
    /// Called after parsing provider responses to catch malformed
    /// data before it reaches a report. Negative `used` is allowed;
    /// the percentage formula is defined for it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidData` when the limit is negative or
    /// either value is not a finite number.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.limit < 0.0 {
            return Err(CoreError::InvalidData(format!(
                "limit {} is negative",
                self.limit
            )));
        }
        if !self.used.is_finite() || !self.limit.is_finite() {
            return Err(CoreError::InvalidData(
                "reading is not a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// A labelled usage gauge within a billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageMeter {
    /// Display label, e.g. "Daily Execution Time Used".
    pub label: String,
    /// The metric behind the gauge.
    pub reading: UsageReading,
}

impl UsageMeter {
    /// Creates a new meter.
    pub fn new(label: impl Into<String>, reading: UsageReading) -> Self {
        Self {
            label: label.into(),
            reading,
        }
    }

    /// Classifies this meter's pace against its window's clock.
    pub fn level(&self, period_pct: f64) -> UsageLevel {
        UsageLevel::classify(self.reading.percent(), period_pct)
    }
}

/// One billing window and the meters drawing against it.
///
/// PhantomBuster carries one meter per each of two windows; Make
/// carries two meters against a single monthly window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePeriod {
    /// The window the meters reset with.
    pub window: BillingWindow,
    /// Gauges consuming this window's quota.
    pub meters: Vec<UsageMeter>,
}

impl UsagePeriod {
    /// Creates a new period.
    pub fn new(window: BillingWindow, meters: Vec<UsageMeter>) -> Self {
        Self { window, meters }
    }
}

/// One provider's structured usage snapshot, as returned by a fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderUsage {
    /// Provider display name used for the report section title.
    pub provider: String,
    /// Billing periods in display order.
    pub periods: Vec<UsagePeriod>,
}

impl ProviderUsage {
    /// Creates a new snapshot.
    pub fn new(provider: impl Into<String>, periods: Vec<UsagePeriod>) -> Self {
        Self {
            provider: provider.into(),
            periods,
        }
    }

    /// Validates every reading in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidData` naming the offending meter
    /// when any reading fails [`UsageReading::validate`].
    pub fn validate(&self) -> Result<(), CoreError> {
        for period in &self.periods {
            for meter in &period.meters {
                meter
                    .reading
                    .validate()
                    .map_err(|e| CoreError::InvalidData(format!("{}: {e}", meter.label)))?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_reading_percent() {
        assert!((UsageReading::new(40.0, 100.0).percent() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reading_zero_limit() {
        assert_eq!(UsageReading::new(40.0, 0.0).percent(), 0.0);
    }

    #[test]
    fn test_reading_over_limit() {
        assert!(UsageReading::new(120.0, 100.0).percent() > 100.0);
    }

    #[test]
    fn test_meter_level() {
        let meter = UsageMeter::new("Operations Used", UsageReading::new(40.0, 100.0));
        assert_eq!(meter.level(50.0), UsageLevel::Warning);
        assert_eq!(meter.level(80.0), UsageLevel::Ok);
        assert_eq!(meter.level(10.0), UsageLevel::Critical);
    }

    #[test]
    fn test_reading_validate_valid() {
        assert!(UsageReading::new(40.0, 100.0).validate().is_ok());
        assert!(UsageReading::new(0.0, 0.0).validate().is_ok());
        // Negative used passes through the formula unvalidated.
        assert!(UsageReading::new(-5.0, 100.0).validate().is_ok());
    }

    #[test]
    fn test_reading_validate_invalid() {
        assert!(UsageReading::new(40.0, -100.0).validate().is_err());
        assert!(UsageReading::new(f64::NAN, 100.0).validate().is_err());
        assert!(UsageReading::new(40.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_provider_usage_validate_names_meter() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let usage = ProviderUsage::new(
            "Make",
            vec![UsagePeriod::new(
                BillingWindow::new("Current Usage Period", start, end),
                vec![UsageMeter::new("Transfer Used", UsageReading::new(1.0, -10.0))],
            )],
        );

        let err = usage.validate().unwrap_err();
        assert!(err.to_string().contains("Transfer Used"));
    }

    #[test]
    fn test_provider_usage_shape() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let usage = ProviderUsage::new(
            "Make",
            vec![UsagePeriod::new(
                BillingWindow::new("Current Usage Period", start, end),
                vec![
                    UsageMeter::new("Operations Used", UsageReading::new(1.0, 10.0)),
                    UsageMeter::new("Transfer Used", UsageReading::new(2.0, 10.0)),
                ],
            )],
        );

        assert_eq!(usage.provider, "Make");
        assert_eq!(usage.periods[0].meters.len(), 2);
    }
}
