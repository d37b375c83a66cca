//! Report filling module
//!
//! Turns a normalized [`ReportPayload`](crate::types::ReportPayload) into a
//! filled workbook:
//! - `cellmap` holds the field-to-coordinate tables (data, not code)
//! - `sheet` wraps worksheet writes (merged-cell policy, sheet lookup)
//! - `filler` runs the single-pass fill and reports skipped regions

pub mod cellmap;
mod filler;
pub mod sheet;

pub use filler::{fill_report, render_report, FillOutcome, SkippedRegion};
