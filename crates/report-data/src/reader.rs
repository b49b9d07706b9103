//! Interval source loading.
//!
//! Reads `;`-delimited hourly metering files line by line and converts every
//! data line into an [`IntervalReading`]. The first physical line is a header
//! and is skipped unread, even when it is blank. Any malformed line aborts
//! the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use report_core::error::{RecordFault, ReportError, Result};
use report_core::models::{IntervalReading, PhaseValues, PHASE_COUNT};
use report_core::time_utils::parse_iso_timestamp;
use tracing::debug;

/// Field delimiter used by every interval source.
pub const DELIMITER: u8 = b';';

/// `timestamp; c1; c2; c3; p1; p2; p3`
pub const FIELD_COUNT: usize = 1 + 2 * PHASE_COUNT;

const CONSUMPTION_COLUMNS: [&str; PHASE_COUNT] = ["c1", "c2", "c3"];
const PRODUCTION_COLUMNS: [&str; PHASE_COUNT] = ["p1", "p2", "p3"];

/// Physical lines at the top of a source that are never parsed.
const HEADER_LINES: usize = 1;

// ── Public API ────────────────────────────────────────────────────────────────

/// Open `path` and load all interval readings from it, in source order.
///
/// Fails with [`ReportError::SourceNotFound`] when the file cannot be opened
/// and [`ReportError::MalformedRecord`] on the first bad data line.
pub fn load_readings(path: &Path) -> Result<Vec<IntervalReading>> {
    let file = File::open(path).map_err(|source| ReportError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let readings = read_readings(file, path)?;

    debug!("Loaded {} readings from {}", readings.len(), path.display());

    Ok(readings)
}

/// Load interval readings from any reader.
///
/// `origin` names the source in error messages. A source containing only
/// the header line (or nothing at all) yields an empty vector. Blank data
/// lines are skipped but still counted for error line numbers.
pub fn read_readings<R: Read>(source: R, origin: &Path) -> Result<Vec<IntervalReading>> {
    let mut fields = csv::ReaderBuilder::new();
    fields
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);

    let mut readings = Vec::new();
    for (index, line) in BufReader::new(source).split(b'\n').enumerate() {
        let line = line.map_err(|source| ReportError::SourceNotFound {
            path: origin.to_path_buf(),
            source,
        })?;

        if index < HEADER_LINES || line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let line_no = index as u64 + 1;
        let record = split_fields(&fields, &line, line_no, origin)?;
        readings.push(parse_record(&record, line_no, origin)?);
    }

    Ok(readings)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Split one raw line into trimmed fields.
fn split_fields(
    fields: &csv::ReaderBuilder,
    line: &[u8],
    line_no: u64,
    origin: &Path,
) -> Result<csv::StringRecord> {
    let mut record = csv::StringRecord::new();
    fields
        .from_reader(line)
        .read_record(&mut record)
        .map_err(|e| ReportError::MalformedRecord {
            path: origin.to_path_buf(),
            line: line_no,
            content: String::from_utf8_lossy(line).trim_end().to_string(),
            reason: RecordFault::Unreadable {
                detail: e.to_string(),
            },
        })?;
    Ok(record)
}

/// Convert one data record into a reading.
fn parse_record(
    record: &csv::StringRecord,
    line_no: u64,
    origin: &Path,
) -> Result<IntervalReading> {
    let malformed = |reason: RecordFault| ReportError::MalformedRecord {
        path: origin.to_path_buf(),
        line: line_no,
        content: record.iter().collect::<Vec<_>>().join(";"),
        reason,
    };

    if record.len() != FIELD_COUNT {
        return Err(malformed(RecordFault::FieldCount {
            found: record.len(),
        }));
    }

    let raw_ts = &record[0];
    let timestamp = parse_iso_timestamp(raw_ts).ok_or_else(|| {
        malformed(RecordFault::Timestamp {
            value: raw_ts.to_string(),
        })
    })?;

    let consumption = parse_phases(record, 1, &CONSUMPTION_COLUMNS).map_err(&malformed)?;
    let production =
        parse_phases(record, 1 + PHASE_COUNT, &PRODUCTION_COLUMNS).map_err(&malformed)?;

    Ok(IntervalReading {
        timestamp,
        consumption,
        production,
    })
}

/// Parse three consecutive integer fields starting at `offset`.
fn parse_phases(
    record: &csv::StringRecord,
    offset: usize,
    columns: &[&'static str; PHASE_COUNT],
) -> std::result::Result<PhaseValues, RecordFault> {
    let mut values: PhaseValues = [0; PHASE_COUNT];
    for (phase, column) in columns.iter().enumerate() {
        let raw = &record[offset + phase];
        values[phase] = raw.parse().map_err(|_| RecordFault::Value {
            column: *column,
            value: raw.to_string(),
        })?;
    }
    Ok(values)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
