//! Percentage arithmetic.
//!
//! Two conversions cover every number the report needs: a used/limit
//! ratio and an elapsed share of a time window. Both return `0.0` for
//! degenerate denominators instead of erroring; negative inputs pass
//! through the formula unvalidated.

use chrono::{DateTime, Utc};

/// Returns `part / total * 100`, or `0.0` when `total` is not positive.
pub fn ratio_percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Returns how far `now` sits through the `[start, end]` window as a
/// percentage, or `0.0` when the window is empty or inverted.
///
/// Millisecond precision; callers convert provider-specific epoch
/// units before reaching this function.
pub fn time_window_percentage(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> f64 {
    let span = (end - start).num_milliseconds();
    if span <= 0 {
        return 0.0;
    }
    let elapsed = (now - start).num_milliseconds();
    ratio_percentage(elapsed as f64, span as f64)
}

// ============================================================================
// Tests
// ============================================================================
