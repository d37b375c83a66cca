//! Worksheet write helpers
//!
//! All cell writes go through here so the merged-cell policy is applied in
//! one place: a write targeting any member of a merged range lands on the
//! range's anchor (top-left) cell, since that is the only writable cell in
//! the range. Clearing skips merged members entirely.

use umya_spreadsheet::helper::coordinate::index_from_coordinate;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use super::cellmap::{CURRENCY_FORMAT, MAX_SHEET_NAME_LEN};

/// Parse an A1 reference into (col, row), 1-based.
pub fn parse_ref(a1: &str) -> Option<(u32, u32)> {
    match index_from_coordinate(a1) {
        (Some(col), Some(row), ..) => Some((col, row)),
        _ => None,
    }
}

/// Anchor of the merged range containing (col, row), if the cell belongs
/// to one.
pub fn merge_anchor(sheet: &Worksheet, col: u32, row: u32) -> Option<(u32, u32)> {
    sheet.get_merge_cells().iter().find_map(|range| {
        let start_col = *range.get_coordinate_start_col().as_ref()?.get_num();
        let start_row = *range.get_coordinate_start_row().as_ref()?.get_num();
        let end_col = range
            .get_coordinate_end_col()
            .as_ref()
            .map_or(start_col, |c| *c.get_num());
        let end_row = range
            .get_coordinate_end_row()
            .as_ref()
            .map_or(start_row, |r| *r.get_num());
        if (start_col..=end_col).contains(&col) && (start_row..=end_row).contains(&row) {
            Some((start_col, start_row))
        } else {
            None
        }
    })
}

/// Where a write aimed at `a1` actually lands.
fn write_target(sheet: &Worksheet, a1: &str) -> Option<(u32, u32)> {
    let (col, row) = parse_ref(a1)?;
    Some(merge_anchor(sheet, col, row).unwrap_or((col, row)))
}

pub fn write_number(sheet: &mut Worksheet, a1: &str, value: f64) {
    if let Some((col, row)) = write_target(sheet, a1) {
        sheet.get_cell_mut((col, row)).set_value_number(value);
    }
}

/// Write a monetary value with the currency number format.
pub fn write_currency(sheet: &mut Worksheet, a1: &str, value: f64) {
    if let Some((col, row)) = write_target(sheet, a1) {
        let cell = sheet.get_cell_mut((col, row));
        cell.set_value_number(value);
        cell.get_style_mut()
            .get_number_format_mut()
            .set_format_code(CURRENCY_FORMAT);
    }
}

pub fn write_text(sheet: &mut Worksheet, a1: &str, value: &str) {
    if let Some((col, row)) = write_target(sheet, a1) {
        sheet.get_cell_mut((col, row)).set_value_string(value);
    }
}

/// Same as [`write_currency`] but addressed by (col, row) - used by the
/// child table writer.
pub fn write_currency_at(sheet: &mut Worksheet, col: u32, row: u32, value: f64) {
    let (col, row) = merge_anchor(sheet, col, row).unwrap_or((col, row));
    let cell = sheet.get_cell_mut((col, row));
    cell.set_value_number(value);
    cell.get_style_mut()
        .get_number_format_mut()
        .set_format_code(CURRENCY_FORMAT);
}

pub fn write_text_at(sheet: &mut Worksheet, col: u32, row: u32, value: &str) {
    let (col, row) = merge_anchor(sheet, col, row).unwrap_or((col, row));
    sheet.get_cell_mut((col, row)).set_value_string(value);
}

/// Blank out every existing cell in the rectangle, skipping cells that
/// belong to a merged range (only the anchor of a merge is writable, and
/// template merges carry labels we must not erase).
pub fn clear_range(
    sheet: &mut Worksheet,
    first_col: u32,
    last_col: u32,
    first_row: u32,
    last_row: u32,
) {
    for row in first_row..=last_row {
        for col in first_col..=last_col {
            if merge_anchor(sheet, col, row).is_some() {
                continue;
            }
            if sheet.get_cell((col, row)).is_some() {
                sheet.get_cell_mut((col, row)).set_value_string("");
            }
        }
    }
}

/// Sanitize a region code into a legal sheet name: `: / \` become `-`,
/// `? *` are stripped, brackets become parentheses, truncated to Excel's
/// 31-character limit.
pub fn sanitize_sheet_name(code: &str) -> String {
    code.trim()
        .chars()
        .filter_map(|c| match c {
            ':' | '/' | '\\' => Some('-'),
            '?' | '*' => None,
            '[' => Some('('),
            ']' => Some(')'),
            other => Some(other),
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Resolve a region code against existing sheet names, case-insensitively.
/// Returns the sheet's actual name, or None when nothing matches.
pub fn resolve_sheet_name(book: &Spreadsheet, code: &str) -> Option<String> {
    let wanted = sanitize_sheet_name(code);
    if wanted.is_empty() {
        return None;
    }
    book.get_sheet_collection()
        .iter()
        .map(|ws| ws.get_name())
        .find(|name| name.eq_ignore_ascii_case(&wanted))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ref() {
        assert_eq!(parse_ref("A1"), Some((1, 1)));
        assert_eq!(parse_ref("D20"), Some((4, 20)));
        assert_eq!(parse_ref("H4"), Some((8, 4)));
        assert_eq!(parse_ref(""), None);
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("East Region"), "East Region");
        assert_eq!(sanitize_sheet_name("North: Hills"), "North- Hills");
        assert_eq!(sanitize_sheet_name("A/B\\C"), "A-B-C");
        assert_eq!(sanitize_sheet_name("What?*"), "What");
        assert_eq!(sanitize_sheet_name("[West]"), "(West)");
        assert_eq!(
            sanitize_sheet_name("A very long region name that keeps going on"),
            "A very long region name that ke"
        );
    }

    #[test]
    fn test_merge_anchor() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.add_merge_cells("B2:C4");

        assert_eq!(merge_anchor(sheet, 2, 2), Some((2, 2)));
        assert_eq!(merge_anchor(sheet, 3, 3), Some((2, 2)));
        assert_eq!(merge_anchor(sheet, 3, 4), Some((2, 2)));
        assert_eq!(merge_anchor(sheet, 4, 4), None);
        assert_eq!(merge_anchor(sheet, 1, 1), None);
    }

    #[test]
    fn test_write_redirects_to_anchor() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.add_merge_cells("D20:E21");

        write_number(sheet, "E21", 42.0);
        assert_eq!(sheet.get_value("D20"), "42");
        assert_eq!(sheet.get_value("E21"), "");
    }

    #[test]
    fn test_clear_range_skips_merged_cells() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.get_cell_mut("B36").set_value("stale");
        sheet.get_cell_mut("C36").set_value("label");
        sheet.add_merge_cells("C36:C37");

        clear_range(sheet, 2, 7, 36, 40);
        assert_eq!(sheet.get_value("B36"), "");
        assert_eq!(sheet.get_value("C36"), "label");
    }

    #[test]
    fn test_resolve_sheet_name_case_insensitive() {
        let mut book = umya_spreadsheet::new_file();
        book.get_active_sheet_mut().set_name("EAST REGION");

        assert_eq!(
            resolve_sheet_name(&book, "east region"),
            Some("EAST REGION".to_string())
        );
        assert_eq!(resolve_sheet_name(&book, "west"), None);
        assert_eq!(resolve_sheet_name(&book, ""), None);
    }
}
