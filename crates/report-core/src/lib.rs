//! Shared building blocks for the energy report.
//!
//! Holds the data model passed between pipeline stages, the error type,
//! value and date formatting, and CLI/batch configuration.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
