//! Field-to-cell coordinate tables
//!
//! Every writable coordinate in the template lives here. The template's
//! layout is the source of truth; the fill logic just walks these tables.
//! Summary and region sheets share the same support-table layout.

/// CAD/USD cell pair for one support line.
#[derive(Debug, Clone, Copy)]
pub struct MoneyCells {
    pub cad: &'static str,
    pub usd: &'static str,
}

pub const SUMMARY_SHEET: &str = "Summary";

pub const EXCHANGE_RATE: &str = "H4";
pub const PERIOD_FROM: &str = "B4";
pub const PERIOD_TO: &str = "B5";
pub const CHILD_COUNT: &str = "C20";

pub const FOOD_DISTRIBUTION: MoneyCells = MoneyCells { cad: "D20", usd: "E20" };
pub const CASEWORKER_SALARY: MoneyCells = MoneyCells { cad: "D22", usd: "E22" };
pub const INCENTIVE: MoneyCells = MoneyCells { cad: "D24", usd: "E24" };
/// Sum of food + salary + incentive, always recomputed.
pub const REGULAR_SUBTOTAL: MoneyCells = MoneyCells { cad: "D25", usd: "E25" };
pub const FAMILY_GIFTS: MoneyCells = MoneyCells { cad: "D28", usd: "E28" };
pub const MEDICAL_GIFTS: MoneyCells = MoneyCells { cad: "D29", usd: "E29" };
/// Sum of family + medical, always recomputed.
pub const ADDITIONAL_SUBTOTAL: MoneyCells = MoneyCells { cad: "D30", usd: "E30" };
/// Sum of the two subtotals, always recomputed.
pub const GRAND_TOTAL: MoneyCells = MoneyCells { cad: "D32", usd: "E32" };

// Region sheet identity block
pub const WIRE_ID: &str = "B8";
pub const CASEWORKER: &str = "B9";
pub const BENEFICIARY: &str = "B10";
pub const REGION_NAME: &str = "B11";
pub const CITY: &str = "B12";

/// Per-child table on region sheets: one row per child, contiguous from
/// `START_ROW`. Rows `START_ROW..=LAST_ROW` are cleared before writing to
/// drop leftovers from earlier runs against the same workbook.
pub mod child_table {
    pub const START_ROW: u32 = 36;
    pub const LAST_ROW: u32 = 95;

    pub const ID_COL: u32 = 2; // B
    pub const NAME_COL: u32 = 3; // C
    pub const FOOD_COL: u32 = 4; // D
    pub const MEDICAL_COL: u32 = 5; // E
    pub const FAMILY_COL: u32 = 6; // F
    pub const TOTAL_COL: u32 = 7; // G

    pub const FIRST_COL: u32 = ID_COL;
    pub const LAST_COL: u32 = TOTAL_COL;
}

/// Number format applied to every monetary cell.
pub const CURRENCY_FORMAT: &str = "#,##0.00";

/// Excel's hard limit on sheet name length.
pub const MAX_SHEET_NAME_LEN: usize = 31;
