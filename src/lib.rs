//! Reportfill - sponsorship report template filler
//!
//! This library takes a JSON payload describing a sponsorship program's
//! financial summary and per-region/per-child breakdowns, loads a fixed
//! Excel template, writes the values into a declarative set of cell
//! coordinates, and returns the filled workbook.
//!
//! # Features
//!
//! - Declarative field-to-cell mapping (the mapping is data, not code)
//! - Subtotals and grand totals recomputed in-process on every fill
//! - Merged-cell aware writes (values land on the range anchor)
//! - Tolerant payload reader: numeric coercion never fails, alternate
//!   JSON shapes from older exporters are accepted
//!
//! # Example
//!
//! ```no_run
//! use reportfill::report::render_report;
//! use reportfill::types::ReportPayload;
//! use std::path::Path;
//!
//! let json: serde_json::Value = serde_json::from_str(r#"{"summary": {"foodDistCAD": 100}}"#)?;
//! let payload = ReportPayload::from_json(&json);
//!
//! let (bytes, outcome) = render_report(Path::new("report_template.xlsx"), &payload)?;
//! println!("{} bytes, {} regions filled", bytes.len(), outcome.regions_filled.len());
//! # Ok::<(), reportfill::error::FillError>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{FillError, FillResult};
pub use report::{render_report, FillOutcome, SkippedRegion};
pub use types::{ChildDetail, Money, RegionRecord, ReportPayload, SupportTotals};
