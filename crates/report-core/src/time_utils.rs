use chrono::{Datelike, NaiveDate, NaiveDateTime};

// ── Weekday names ─────────────────────────────────────────────────────────────

/// English weekday names indexed 0 = Monday … 6 = Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekday name of a calendar date.
pub fn weekday_name_of(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

// ── Date rendering ────────────────────────────────────────────────────────────

/// Render a date as `dd.mm.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Parse an ISO-8601 date-and-time into a wall-clock [`NaiveDateTime`].
///
/// Accepts `T` or a space between date and time, minutes-only or
/// seconds (with optional fraction), and an optional `Z` / `±HH:MM` offset.
/// Offsets are dropped without shifting the wall clock, so the calendar
/// date is the one written in the source. A bare date is rejected.
pub fn parse_iso_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Replace trailing 'Z' with '+00:00'.
    let normalised = if let Some(stripped) = s.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        s.to_string()
    };

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&normalised) {
        return Some(dt.naive_local());
    }

    const OFFSET_FMTS: &[&str] = &[
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%d %H:%M%:z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
    ];
    for fmt in OFFSET_FMTS {
        if let Ok(dt) = chrono::DateTime::parse_from_str(&normalised, fmt) {
            return Some(dt.naive_local());
        }
    }

    const NAIVE_FMTS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FMTS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
