//! Single-pass report fill
//!
//! The workbook is loaded fresh from the template for every call, mutated in
//! place, serialized to a byte buffer, and discarded. Nothing survives a
//! call, so identical payloads against the same template produce identical
//! cell values.

use std::io::Cursor;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::{FillError, FillResult};
use crate::types::{RegionRecord, ReportPayload, SupportTotals};

use super::cellmap::{self, child_table};
use super::sheet;

/// A region record that produced no sheet writes, and why.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRegion {
    pub code: String,
    pub reason: String,
}

/// What a fill pass did. Skips are reported, never fatal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FillOutcome {
    pub summary_filled: bool,
    pub regions_filled: Vec<String>,
    pub skipped: Vec<SkippedRegion>,
}

/// Load the template, fill it, and serialize the result to a byte buffer.
pub fn render_report(template: &Path, payload: &ReportPayload) -> FillResult<(Vec<u8>, FillOutcome)> {
    if !template.is_file() {
        return Err(FillError::TemplateMissing(template.display().to_string()));
    }

    let mut book = umya_spreadsheet::reader::xlsx::read(template)?;
    let outcome = fill_report(&mut book, payload)?;

    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buffer)?;
    Ok((buffer.into_inner(), outcome))
}

/// Fill the Summary sheet and every region sheet the payload matches.
///
/// A region is skipped (and recorded) when its code is empty, names an
/// aggregate pseudo-row, or matches no sheet in the template. Sheets are
/// never created for unmatched codes.
pub fn fill_report(book: &mut Spreadsheet, payload: &ReportPayload) -> FillResult<FillOutcome> {
    let mut outcome = FillOutcome::default();

    let summary_name = sheet::resolve_sheet_name(book, cellmap::SUMMARY_SHEET)
        .ok_or_else(|| FillError::SheetMissing(cellmap::SUMMARY_SHEET.to_string()))?;
    let summary = book
        .get_sheet_by_name_mut(&summary_name)
        .ok_or_else(|| FillError::SheetMissing(summary_name.clone()))?;

    write_header(summary, payload);
    sheet::write_number(summary, cellmap::CHILD_COUNT, payload.total_children as f64);
    write_support_rows(summary, &payload.summary);
    outcome.summary_filled = true;
    debug!(sheet = %summary_name, "summary sheet filled");

    for region in &payload.regions {
        let code = region.code.trim();
        if code.is_empty() {
            outcome.skipped.push(SkippedRegion {
                code: String::new(),
                reason: "empty region code".to_string(),
            });
            continue;
        }
        // Aggregate pseudo-rows from the upstream exporter, not real regions.
        if code.to_ascii_uppercase().contains("GRAND COUNT") {
            outcome.skipped.push(SkippedRegion {
                code: code.to_string(),
                reason: "aggregate row".to_string(),
            });
            continue;
        }

        let Some(name) = sheet::resolve_sheet_name(book, code) else {
            warn!(code, "no sheet matches region code, skipping");
            outcome.skipped.push(SkippedRegion {
                code: code.to_string(),
                reason: "no matching sheet".to_string(),
            });
            continue;
        };

        // Per-region failures go to the skip list; they never abort the fill.
        let Some(ws) = book.get_sheet_by_name_mut(&name) else {
            outcome.skipped.push(SkippedRegion {
                code: code.to_string(),
                reason: format!("sheet '{name}' not writable"),
            });
            continue;
        };
        fill_region(ws, payload, region);
        debug!(sheet = %name, children = region.child_details.len(), "region sheet filled");
        outcome.regions_filled.push(name);
    }

    Ok(outcome)
}

/// Exchange rate and report period, present on every sheet.
fn write_header(ws: &mut Worksheet, payload: &ReportPayload) {
    sheet::write_number(ws, cellmap::EXCHANGE_RATE, payload.exchange_rate);
    sheet::write_text(ws, cellmap::PERIOD_FROM, &payload.period_from);
    sheet::write_text(ws, cellmap::PERIOD_TO, &payload.period_to);
}

/// The support table shared by Summary and region sheets. Subtotals and the
/// grand total are recomputed from the line items on every call, never read
/// back from the workbook or taken from input.
fn write_support_rows(ws: &mut Worksheet, totals: &SupportTotals) {
    let lines = [
        (cellmap::FOOD_DISTRIBUTION, totals.food),
        (cellmap::CASEWORKER_SALARY, totals.salary),
        (cellmap::INCENTIVE, totals.incentive),
        (cellmap::REGULAR_SUBTOTAL, totals.regular_subtotal()),
        (cellmap::FAMILY_GIFTS, totals.family),
        (cellmap::MEDICAL_GIFTS, totals.medical),
        (cellmap::ADDITIONAL_SUBTOTAL, totals.additional_subtotal()),
        (cellmap::GRAND_TOTAL, totals.grand_total()),
    ];
    for (cells, amount) in lines {
        sheet::write_currency(ws, cells.cad, amount.cad);
        sheet::write_currency(ws, cells.usd, amount.usd);
    }
}

fn fill_region(ws: &mut Worksheet, payload: &ReportPayload, region: &RegionRecord) {
    write_header(ws, payload);

    sheet::write_text(ws, cellmap::WIRE_ID, &region.wire_id);
    sheet::write_text(ws, cellmap::CASEWORKER, &region.caseworker);
    sheet::write_text(ws, cellmap::BENEFICIARY, &region.beneficiary);
    sheet::write_text(ws, cellmap::REGION_NAME, &region.region);
    sheet::write_text(ws, cellmap::CITY, &region.city);

    sheet::write_number(ws, cellmap::CHILD_COUNT, region.child_count() as f64);
    write_support_rows(ws, &region.totals);
    write_child_table(ws, region);
}

/// Clear the child-table range, then write one row per child starting at the
/// fixed start row with no gaps.
fn write_child_table(ws: &mut Worksheet, region: &RegionRecord) {
    sheet::clear_range(
        ws,
        child_table::FIRST_COL,
        child_table::LAST_COL,
        child_table::START_ROW,
        child_table::LAST_ROW,
    );

    for (index, child) in region.child_details.iter().enumerate() {
        let row = child_table::START_ROW + index as u32;
        sheet::write_text_at(ws, child_table::ID_COL, row, &child.id);
        sheet::write_text_at(ws, child_table::NAME_COL, row, &child.name);
        sheet::write_currency_at(ws, child_table::FOOD_COL, row, child.food);
        sheet::write_currency_at(ws, child_table::MEDICAL_COL, row, child.medical);
        sheet::write_currency_at(ws, child_table::FAMILY_COL, row, child.family);
        sheet::write_currency_at(ws, child_table::TOTAL_COL, row, child.row_total());
    }
}
