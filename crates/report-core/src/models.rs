use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Number of metering phases (v1, v2, v3) carried by every reading.
pub const PHASE_COUNT: usize = 3;

/// Per-phase watt-hour values, indexed v1, v2, v3.
pub type PhaseValues = [i64; PHASE_COUNT];

/// Per-phase running sums in Wh. Wider than [`PhaseValues`] so that summing
/// any realistic number of `i64` readings cannot overflow.
pub type PhaseTotals = [i128; PHASE_COUNT];

/// One timestamped row from an interval source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalReading {
    /// Wall-clock date and time of the interval as written in the source.
    pub timestamp: NaiveDateTime,
    /// Consumed energy per phase in Wh.
    pub consumption: PhaseValues,
    /// Produced energy per phase in Wh.
    pub production: PhaseValues,
}

impl IntervalReading {
    /// Calendar date of the reading; the time of day is discarded.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Per-phase sums of every reading that falls on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub consumption: PhaseTotals,
    pub production: PhaseTotals,
}

impl DailyTotals {
    /// A zero-initialised entry for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            consumption: [0; PHASE_COUNT],
            production: [0; PHASE_COUNT],
        }
    }

    /// Add every phase of `reading` into the running totals.
    pub fn add_reading(&mut self, reading: &IntervalReading) {
        for phase in 0..PHASE_COUNT {
            self.consumption[phase] += i128::from(reading.consumption[phase]);
            self.production[phase] += i128::from(reading.production[phase]);
        }
    }
}

/// Daily totals keyed by calendar date.
pub type DailyTotalsByDate = BTreeMap<NaiveDate, DailyTotals>;

/// Rendered text block for one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSection {
    pub week: u32,
    pub text: String,
}

/// Ordered concatenation of week sections; the only persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<WeekSection>,
}

impl Report {
    /// Join all sections, in order, into the document that gets persisted.
    pub fn to_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A (week number, source path) pair from the batch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeekSource {
    pub week: u32,
    pub source: PathBuf,
}

impl WeekSource {
    pub fn new(week: u32, source: impl Into<PathBuf>) -> Self {
        Self {
            week,
            source: source.into(),
        }
    }
}

/// Where the combined report is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSink {
    /// Overwrite the file at this path.
    File(PathBuf),
    /// Stream to standard output.
    Stdout,
}

impl std::fmt::Display for ReportSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSink::File(path) => write!(f, "{}", path.display()),
            ReportSink::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// A fully resolved batch run: which weeks to render and where to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub weeks: Vec<WeekSource>,
    pub destination: ReportSink,
}
