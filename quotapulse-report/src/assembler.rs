//! Report assembly.

use chrono::{DateTime, Utc};
use quotapulse_core::{render_bar, ProviderUsage};
use quotapulse_providers::UsageSource;
use tracing::{info, warn};

/// The assembled report: one text section per provider, in fetch
/// order. Built once per run and handed straight to the delivery
/// sink; never persisted.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Section texts in fetch order.
    pub sections: Vec<String>,
}

impl Report {
    /// The full report body: sections joined with blank lines.
    pub fn text(&self) -> String {
        self.sections.join("\n\n")
    }

    /// Returns true if no sections were produced.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Assembles a report from a fixed sequence of usage sources.
///
/// Sources are fetched sequentially in construction order. A source
/// that fails contributes its error text verbatim as its section;
/// it never prevents the remaining sections from being produced.
pub struct ReportAssembler {
    sources: Vec<Box<dyn UsageSource>>,
}

impl ReportAssembler {
    /// Creates an assembler over the given sources.
    pub fn new(sources: Vec<Box<dyn UsageSource>>) -> Self {
        Self { sources }
    }

    /// Returns the provider names in fetch order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Fetches every source and assembles the report.
    pub async fn assemble(&self) -> Report {
        self.assemble_at(Utc::now()).await
    }

    /// Like [`Self::assemble`], with an explicit clock for the
    /// elapsed-window math.
    pub async fn assemble_at(&self, now: DateTime<Utc>) -> Report {
        let mut report = Report::default();

        for source in &self.sources {
            match source.fetch().await {
                Ok(usage) => {
                    info!(provider = source.name(), "Fetched usage");
                    report.sections.push(render_section(&usage, now));
                }
                Err(e) => {
                    warn!(provider = source.name(), error = %e, "Fetch failed");
                    report.sections.push(e.to_string());
                }
            }
        }

        report
    }
}

/// Renders one provider's section.
///
/// Layout, per billing period: one line per meter (usage bar plus
/// pace glyph), then the elapsed-window line.
pub fn render_section(usage: &ProviderUsage, now: DateTime<Utc>) -> String {
    let mut lines = vec![format!("# === {} Usage Information ===", usage.provider)];

    for (i, period) in usage.periods.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }

        let period_pct = period.window.elapsed_percent(now);
        for meter in &period.meters {
            lines.push(format!(
                "{}: {} {}",
                meter.label,
                render_bar(meter.reading.percent()),
                meter.level(period_pct).emoji()
            ));
        }
        lines.push(format!(
            "Percent Through {}: {}",
            period.window.label,
            render_bar(period_pct)
        ));
    }

    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
