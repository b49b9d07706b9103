//! Multi-week batch orchestration.
//!
//! Runs loader → aggregator → renderer for every configured week in the
//! order given, joins the sections into one [`Report`] and persists it. Any
//! failure aborts the whole run before anything is written.

use std::io::Write;

use report_core::error::Result;
use report_core::models::{BatchConfig, Report, ReportSink, WeekSection, WeekSource};
use report_data::aggregator::DailyAggregator;
use report_data::reader::load_readings;
use report_render::week_table::render_week_section;
use tracing::{debug, info};

use crate::writer::write_report;

// ── Public types ──────────────────────────────────────────────────────────────

/// What a successful batch run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Number of week sections in the report.
    pub sections: usize,
    /// Size of the persisted report in bytes.
    pub bytes: usize,
    /// Where the report went.
    pub destination: ReportSink,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Load, aggregate and render a single week.
pub fn render_week(week: &WeekSource) -> Result<WeekSection> {
    let readings = load_readings(&week.source)?;
    let days = DailyAggregator::aggregate(&readings);

    debug!(
        "Week {}: {} readings over {} day(s)",
        week.week,
        readings.len(),
        days.len()
    );

    Ok(render_week_section(week.week, &days))
}

/// Render every week in caller order and combine them into one report.
///
/// Stops at the first failing source; no partial report is returned.
pub fn build_report(weeks: &[WeekSource]) -> Result<Report> {
    let sections = weeks
        .iter()
        .map(|week| {
            info!("Processing week {} from {}", week.week, week.source.display());
            render_week(week)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Report { sections })
}

/// Build the full report for `config` and write it to its destination.
///
/// Exactly one write happens on success and none on failure.
pub fn run_batch(config: &BatchConfig) -> Result<BatchOutcome> {
    run_batch_with(config, || std::io::stdout().lock())
}

/// Same as [`run_batch`], with `stream` opening the writer for a
/// [`ReportSink::Stdout`] destination.
pub fn run_batch_with<W, F>(config: &BatchConfig, stream: F) -> Result<BatchOutcome>
where
    W: Write,
    F: FnOnce() -> W,
{
    info!(
        "Building report for {} week(s) -> {}",
        config.weeks.len(),
        config.destination
    );

    let report = build_report(&config.weeks)?;
    let text = report.to_text();

    write_report(&text, &config.destination, stream)?;

    info!("Report written to {}", config.destination);

    Ok(BatchOutcome {
        sections: report.sections.len(),
        bytes: text.len(),
        destination: config.destination.clone(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
