//! Make API response types.

use chrono::{DateTime, Utc};
use quotapulse_core::{BillingWindow, ProviderUsage, UsageMeter, UsagePeriod, UsageReading};
use serde::Deserialize;

use crate::error::ProviderError;

/// Display name for report sections.
pub(crate) const DISPLAY_NAME: &str = "Make";

/// Response envelope from the organizations endpoint.
#[derive(Debug, Deserialize)]
pub struct MakeOrganizationResponse {
    /// The organization record.
    pub organization: MakeOrganization,
}

/// Organization usage counters and license limits.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeOrganization {
    /// Operations consumed this period, string-encoded.
    pub operations: String,
    /// Bytes transferred this period, string-encoded.
    pub transfer: String,
    /// License limits.
    pub license: MakeLicense,
    /// When the current usage period opened.
    pub last_reset: DateTime<Utc>,
    /// When the current usage period resets.
    pub next_reset: DateTime<Utc>,
}

/// License limits embedded in the organization record.
#[derive(Debug, Deserialize)]
pub struct MakeLicense {
    /// Operations quota per period.
    pub operations: f64,
    /// Transfer quota per period, in bytes.
    pub transfer: f64,
}

impl MakeOrganization {
    /// Converts the raw record into the domain snapshot: one period
    /// with operations and transfer meters.
    pub fn to_usage(&self) -> Result<ProviderUsage, ProviderError> {
        let operations = parse_counter(&self.operations, "operations")?;
        let transfer = parse_counter(&self.transfer, "transfer")?;

        let period = UsagePeriod::new(
            BillingWindow::new("Current Usage Period", self.last_reset, self.next_reset),
            vec![
                UsageMeter::new(
                    "Operations Used",
                    UsageReading::new(operations, self.license.operations),
                ),
                UsageMeter::new(
                    "Transfer Used",
                    UsageReading::new(transfer, self.license.transfer),
                ),
            ],
        );

        let usage = ProviderUsage::new(DISPLAY_NAME, vec![period]);
        usage.validate()?;
        Ok(usage)
    }
}

fn parse_counter(raw: &str, field: &str) -> Result<f64, ProviderError> {
    raw.trim().parse::<f64>().map_err(|_| {
        ProviderError::MalformedResponse(format!("{field}: expected numeric string, got {raw:?}"))
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "organization": {
            "operations": "4000",
            "transfer": "536870912",
            "license": {"operations": 10000, "transfer": 1073741824},
            "lastReset": "2024-03-01T00:00:00.000Z",
            "nextReset": "2024-04-01T00:00:00.000Z"
        }
    }"#;

    #[test]
    fn test_parse_and_convert() {
        let response: MakeOrganizationResponse = serde_json::from_str(SAMPLE).unwrap();
        let usage = response.organization.to_usage().unwrap();

        assert_eq!(usage.provider, "Make");
        assert_eq!(usage.periods.len(), 1);

        let period = &usage.periods[0];
        assert_eq!(period.meters.len(), 2);
        assert!((period.meters[0].reading.percent() - 40.0).abs() < 1e-9);
        assert!((period.meters[1].reading.percent() - 50.0).abs() < 1e-9);
        assert_eq!(period.window.label, "Current Usage Period");
    }

    #[test]
    fn test_negative_license_limit_is_rejected() {
        let response: MakeOrganizationResponse = serde_json::from_str(
            r#"{
                "organization": {
                    "operations": "4000",
                    "transfer": "0",
                    "license": {"operations": -10000, "transfer": 1},
                    "lastReset": "2024-03-01T00:00:00.000Z",
                    "nextReset": "2024-04-01T00:00:00.000Z"
                }
            }"#,
        )
        .unwrap();

        let err = response.organization.to_usage().unwrap_err();
        assert!(matches!(err, ProviderError::Core(_)));
        assert!(err.to_string().contains("Operations Used"));
    }

    #[test]
    fn test_non_numeric_counter_is_typed_error() {
        let response: MakeOrganizationResponse = serde_json::from_str(
            r#"{
                "organization": {
                    "operations": "lots",
                    "transfer": "0",
                    "license": {"operations": 10000, "transfer": 1},
                    "lastReset": "2024-03-01T00:00:00.000Z",
                    "nextReset": "2024-04-01T00:00:00.000Z"
                }
            }"#,
        )
        .unwrap();

        let err = response.organization.to_usage().unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
        assert!(err.to_string().contains("operations"));
    }
}
