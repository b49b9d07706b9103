//! Data ingestion layer for the energy report.
//!
//! Loads `;`-delimited interval sources into readings and reduces them to
//! per-day totals.

pub mod aggregator;
pub mod reader;

pub use report_core as core;
