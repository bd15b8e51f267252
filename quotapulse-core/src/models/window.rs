//! Billing windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::percent::time_window_percentage;

/// A recurring quota reset period.
///
/// Windows are built at the provider boundary (daily/monthly reset
/// epochs, last/next reset pairs) and consumed by the report for
/// elapsed-time bars and pace classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingWindow {
    /// Human label, e.g. "Daily Period" or "Current Usage Period".
    pub label: String,
    /// When the window opened.
    pub start: DateTime<Utc>,
    /// When the quota resets.
    pub end: DateTime<Utc>,
}

impl BillingWindow {
    /// Creates a new window.
    pub fn new(label: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Derives a window ending at `end` and spanning `duration` back
    /// from it. Providers that only report a next-reset instant use
    /// this with their nominal period length.
    pub fn ending_at(
        label: impl Into<String>,
        end: DateTime<Utc>,
        duration: chrono::Duration,
    ) -> Self {
        Self::new(label, end - duration, end)
    }

    /// How far `now` sits through this window, as a percentage.
    ///
    /// Not clamped: a stale window can report over 100.
    pub fn elapsed_percent(&self, now: DateTime<Utc>) -> f64 {
        time_window_percentage(now, self.start, self.end)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_elapsed_percent() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let window = BillingWindow::new("Daily Period", start, end);

        let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert!((window.elapsed_percent(noon) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_ending_at() {
        let end = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let window = BillingWindow::ending_at("Daily Period", end, Duration::hours(24));

        assert_eq!(window.start, end - Duration::hours(24));
        assert_eq!(window.end, end);
    }

    #[test]
    fn test_stale_window_exceeds_100() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let window = BillingWindow::new("Daily Period", start, end);

        let late = Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap();
        assert!(window.elapsed_percent(late) > 100.0);
    }
}
