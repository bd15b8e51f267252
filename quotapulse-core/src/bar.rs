//! Fixed-width textual progress bars.

/// Number of cells in a rendered bar.
pub const BAR_WIDTH: usize = 20;

// Progress bar characters
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Renders a percentage as a 20-cell bar followed by the numeric value
/// to two decimals, e.g. `[████████░░░░░░░░░░░░] 40.00%`.
///
/// The fill is clamped to the bar width so out-of-range percentages
/// cannot overflow the fixed layout; the printed number is the true
/// unclamped value.
pub fn render_bar(percentage: f64) -> String {
    let clamped = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);

    format!(
        "[{}{}] {:.2}%",
        BAR_FULL.to_string().repeat(filled),
        BAR_EMPTY.to_string().repeat(empty),
        percentage
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_empty() {
        assert_eq!(render_bar(0.0), format!("[{}] 0.00%", "░".repeat(20)));
    }

    #[test]
    fn test_bar_full() {
        assert_eq!(render_bar(100.0), format!("[{}] 100.00%", "█".repeat(20)));
    }

    #[test]
    fn test_bar_half() {
        let bar = render_bar(50.0);
        assert_eq!(bar, format!("[{}{}] 50.00%", "█".repeat(10), "░".repeat(10)));
    }

    #[test]
    fn test_bar_two_decimals() {
        assert!(render_bar(33.333).ends_with("33.33%"));
        assert!(render_bar(40.0).ends_with("40.00%"));
    }

    #[test]
    fn test_bar_over_limit_clamps_fill_keeps_number() {
        let bar = render_bar(132.5);
        assert!(bar.contains(&"█".repeat(20)));
        assert!(!bar.contains('░'));
        assert!(bar.ends_with("132.50%"));
    }

    #[test]
    fn test_bar_negative_clamps_fill_keeps_number() {
        let bar = render_bar(-5.0);
        assert!(bar.contains(&"░".repeat(20)));
        assert!(bar.ends_with("-5.00%"));
    }
}
