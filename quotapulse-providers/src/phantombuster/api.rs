//! PhantomBuster API response types.

use chrono::{DateTime, Duration, Utc};
use quotapulse_core::{BillingWindow, ProviderUsage, UsageMeter, UsagePeriod, UsageReading};
use serde::Deserialize;

use crate::error::ProviderError;

/// Display name for report sections.
pub(crate) const DISPLAY_NAME: &str = "PhantomBuster";

/// Response from the org resources endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgResources {
    /// Execution time consumed today, in seconds.
    pub daily_execution_time: f64,
    /// Execution time consumed this month, in seconds.
    pub monthly_execution_time: f64,
    /// Millisecond epoch of the next daily reset.
    pub daily_resource_next_reset_at: i64,
    /// Millisecond epoch of the next monthly reset.
    pub monthly_resource_next_reset_at: i64,
    /// Plan limits.
    pub plan: PlanResources,
}

/// Plan limits embedded in the resources response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResources {
    /// Daily execution-time quota, in seconds.
    pub daily_execution_time: f64,
    /// Monthly execution-time quota, in seconds.
    pub monthly_execution_time: f64,
}

impl OrgResources {
    /// Converts the raw response into the domain snapshot: one daily
    /// period and one monthly period, one execution-time meter each.
    pub fn to_usage(&self) -> Result<ProviderUsage, ProviderError> {
        let daily_reset = epoch_millis(self.daily_resource_next_reset_at, "dailyResourceNextResetAt")?;
        let monthly_reset = epoch_millis(
            self.monthly_resource_next_reset_at,
            "monthlyResourceNextResetAt",
        )?;

        let daily = UsagePeriod::new(
            BillingWindow::ending_at("Daily Period", daily_reset, Duration::hours(24)),
            vec![UsageMeter::new(
                "Daily Execution Time Used",
                UsageReading::new(self.daily_execution_time, self.plan.daily_execution_time),
            )],
        );

        let monthly = UsagePeriod::new(
            BillingWindow::ending_at("Monthly Period", monthly_reset, Duration::days(30)),
            vec![UsageMeter::new(
                "Monthly Execution Time Used",
                UsageReading::new(self.monthly_execution_time, self.plan.monthly_execution_time),
            )],
        );

        let usage = ProviderUsage::new(DISPLAY_NAME, vec![daily, monthly]);
        usage.validate()?;
        Ok(usage)
    }
}

fn epoch_millis(millis: i64, field: &str) -> Result<DateTime<Utc>, ProviderError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ProviderError::MalformedResponse(format!("{field}: bad epoch {millis}")))
}

// ============================================================================
// Tests
// ============================================================================
