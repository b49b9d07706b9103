//! Daily aggregation of interval readings.
//!
//! Groups readings by calendar date and sums every phase. Readings that
//! share a timestamp are all counted; nothing is deduplicated.

use report_core::models::{DailyTotals, DailyTotalsByDate, IntervalReading};

/// Stateless helper that reduces readings to per-day totals.
pub struct DailyAggregator;

impl DailyAggregator {
    /// Sum `readings` per calendar date.
    ///
    /// The result does not depend on the order of `readings`. An empty slice
    /// yields an empty mapping.
    pub fn aggregate(readings: &[IntervalReading]) -> DailyTotalsByDate {
        let mut days = DailyTotalsByDate::new();

        for reading in readings {
            let day = reading.date();
            days.entry(day)
                .or_insert_with(|| DailyTotals::new(day))
                .add_reading(reading);
        }

        days
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
