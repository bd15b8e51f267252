//! Usage-pace classification.

use serde::{Deserialize, Serialize};

/// Margin (in percentage points) around the elapsed-time mark within
/// which usage is considered on pace.
const PACE_MARGIN: f64 = 10.0;

/// How a quota's consumption compares to the time elapsed in its
/// billing window.
///
/// Recomputed from scratch for every report; there is no hysteresis
/// and no memory between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageLevel {
    /// Usage pace is comfortably behind time elapsed.
    Ok,
    /// Usage pace roughly tracks time elapsed.
    Warning,
    /// Usage pace is ahead of time elapsed; the quota may run out
    /// before the period resets.
    Critical,
}

impl UsageLevel {
    /// Classifies a usage percentage against the billing-period
    /// elapsed percentage.
    ///
    /// - usage at least 10 points behind the clock → [`Self::Ok`]
    /// - usage within 10 points of the clock → [`Self::Warning`]
    /// - otherwise → [`Self::Critical`]
    pub fn classify(usage_pct: f64, period_pct: f64) -> Self {
        if usage_pct <= period_pct - PACE_MARGIN {
            Self::Ok
        } else if (usage_pct - period_pct).abs() <= PACE_MARGIN {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "On Track",
            Self::Warning => "Watch",
            Self::Critical => "Over Pace",
        }
    }

    /// Returns an emoji glyph for report lines.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Ok => "🟢",
            Self::Warning => "🟡",
            Self::Critical => "🔴",
        }
    }
}

impl std::fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ok_boundary() {
        // Exactly 10 points behind the clock is still Ok.
        assert_eq!(UsageLevel::classify(40.0, 50.0), UsageLevel::Ok);
        assert_eq!(UsageLevel::classify(0.0, 50.0), UsageLevel::Ok);
    }

    #[test]
    fn test_classify_warning() {
        assert_eq!(UsageLevel::classify(50.0, 50.0), UsageLevel::Warning);
        assert_eq!(UsageLevel::classify(45.0, 50.0), UsageLevel::Warning);
        // Exactly 10 points ahead is still Warning.
        assert_eq!(UsageLevel::classify(60.0, 50.0), UsageLevel::Warning);
    }

    #[test]
    fn test_classify_critical() {
        assert_eq!(UsageLevel::classify(61.0, 50.0), UsageLevel::Critical);
        assert_eq!(UsageLevel::classify(100.0, 20.0), UsageLevel::Critical);
    }

    #[test]
    fn test_classify_over_quota() {
        // Over-quota usage early in the window is always Critical.
        assert_eq!(UsageLevel::classify(130.0, 5.0), UsageLevel::Critical);
    }

    #[test]
    fn test_display() {
        assert_eq!(UsageLevel::Ok.to_string(), "🟢 On Track");
        assert_eq!(UsageLevel::Critical.to_string(), "🔴 Over Pace");
    }
}
