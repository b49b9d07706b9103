//! Batch runtime for the energy report.
//!
//! Drives the per-week pipeline across all configured sources, combines the
//! rendered sections and persists the result.

pub mod combiner;
pub mod writer;

pub use report_core as core;
pub use report_data as data;
pub use report_render as render;
