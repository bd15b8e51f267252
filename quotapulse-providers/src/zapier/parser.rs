//! Zapier usage-page text extraction.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use quotapulse_core::{BillingWindow, ProviderUsage, UsageMeter, UsagePeriod, UsageReading};
use regex::Regex;
use tracing::debug;

use crate::error::ProviderError;

/// Display name for report sections.
pub(crate) const DISPLAY_NAME: &str = "Zapier";

const TASKS_PATTERN: &str = r"(?i)([\d,]+)\s+of\s+([\d,]+)\s+tasks";
const RESET_PATTERN: &str = r"(?i)resets on ([A-Za-z]+ \d{1,2}, \d{4})";

/// Extracts a task-usage snapshot from usage-page text.
///
/// Expects a `"N of M tasks"` counter and a `"resets on Month D, YYYY"`
/// date somewhere in the page. The page only names the reset day, so
/// the window start is derived from the nominal 30-day period.
pub fn parse_usage_page(text: &str) -> Result<ProviderUsage, ProviderError> {
    debug!(len = text.len(), "Parsing Zapier usage page");

    let (used, limit) = extract_tasks(text)?;
    let reset = extract_reset(text)?;

    let period = UsagePeriod::new(
        BillingWindow::ending_at("Current Usage Period", reset, Duration::days(30)),
        vec![UsageMeter::new(
            "Tasks Used",
            UsageReading::new(used, limit),
        )],
    );

    let usage = ProviderUsage::new(DISPLAY_NAME, vec![period]);
    usage.validate()?;
    Ok(usage)
}

fn extract_tasks(text: &str) -> Result<(f64, f64), ProviderError> {
    let re = Regex::new(TASKS_PATTERN).map_err(|e| ProviderError::Scrape(e.to_string()))?;
    let caps = re
        .captures(text)
        .ok_or_else(|| ProviderError::Scrape("no task counter found on usage page".into()))?;

    Ok((parse_count(&caps[1])?, parse_count(&caps[2])?))
}

fn extract_reset(text: &str) -> Result<DateTime<Utc>, ProviderError> {
    let re = Regex::new(RESET_PATTERN).map_err(|e| ProviderError::Scrape(e.to_string()))?;
    let caps = re
        .captures(text)
        .ok_or_else(|| ProviderError::Scrape("no reset date found on usage page".into()))?;

    let date = NaiveDate::parse_from_str(&caps[1], "%B %d, %Y")
        .map_err(|e| ProviderError::Scrape(format!("bad reset date {:?}: {e}", &caps[1])))?;

    // The page gives only a day; treat the reset as midnight UTC.
    Ok(date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ProviderError::Scrape("bad reset date".into()))?
        .and_utc())
}

fn parse_count(raw: &str) -> Result<f64, ProviderError> {
    raw.replace(',', "")
        .parse::<f64>()
        .map_err(|_| ProviderError::Scrape(format!("bad task count {raw:?}")))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE_PAGE: &str = "\
        <h1>Usage</h1>\n\
        <p>You have used 1,250 of 5,000 tasks this billing period.</p>\n\
        <p>Your plan resets on April 1, 2024.</p>";

    #[test]
    fn test_parse_usage_page() {
        let usage = parse_usage_page(SAMPLE_PAGE).unwrap();

        assert_eq!(usage.provider, "Zapier");
        let period = &usage.periods[0];
        assert!((period.meters[0].reading.percent() - 25.0).abs() < 1e-9);
        assert_eq!(
            period.window.end,
            Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(period.window.end - period.window.start, Duration::days(30));
    }

    #[test]
    fn test_missing_counter() {
        let err = parse_usage_page("<h1>Usage</h1>").unwrap_err();
        assert!(matches!(err, ProviderError::Scrape(_)));
        assert!(err.to_string().contains("task counter"));
    }

    #[test]
    fn test_missing_reset_date() {
        let err = parse_usage_page("3 of 10 tasks").unwrap_err();
        assert!(err.to_string().contains("reset date"));
    }

    #[test]
    fn test_bad_reset_date() {
        let err = parse_usage_page("3 of 10 tasks, resets on Smarch 5, 2024").unwrap_err();
        assert!(matches!(err, ProviderError::Scrape(_)));
    }
}
