//! Text rendering layer for the energy report.
//!
//! Turns a week's daily totals into the fixed-width, comma-decimal table
//! that makes up one section of the report.

pub mod week_table;

pub use report_core as core;
