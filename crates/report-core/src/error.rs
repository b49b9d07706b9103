use std::path::PathBuf;
use thiserror::Error;

/// Why a single data line was rejected by the loader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordFault {
    /// The line did not split into exactly seven `;`-separated fields.
    #[error("expected 7 fields, found {found}")]
    FieldCount { found: usize },

    /// The first field is not an ISO-8601 date-and-time.
    #[error("invalid ISO-8601 timestamp \"{value}\"")]
    Timestamp { value: String },

    /// One of the six watt-hour columns is not a decimal integer.
    #[error("column {column} is not an integer: \"{value}\"")]
    Value { column: &'static str, value: String },

    /// The line could not be decoded at all (e.g. invalid UTF-8).
    #[error("unreadable line: {detail}")]
    Unreadable { detail: String },
}

/// All errors produced by the energy report pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A configured source file is missing or cannot be opened.
    #[error("Source not found {path}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line violates the interval record format.
    #[error("Malformed record in {path} at line {line}: {reason} (line: \"{content}\")")]
    MalformedRecord {
        path: PathBuf,
        /// 1-based line number within the source, header included.
        line: u64,
        content: String,
        reason: RecordFault,
    },

    /// The report destination could not be written.
    #[error("Failed to write report to {path}: {source}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The batch configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
