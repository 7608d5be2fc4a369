//! Output generation for a scrape run.
//!
//! # Submodules
//!
//! - [`xlsx`]: builds the `Title` row set and writes it to a workbook
//! - [`chart`]: builds the keyword frequency series and displays it
//! - [`json`]: serializes the final report for stdout

pub mod chart;
pub mod json;
pub mod xlsx;
