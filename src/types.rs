//! Payload model for the sponsorship report
//!
//! The upstream exporter has shipped several payload shapes over time, so
//! everything goes through one normalization step: [`ReportPayload::from_json`]
//! is a total function over arbitrary JSON. Missing or non-numeric monetary
//! fields become zero, alternate key spellings are accepted, and the regions
//! list is read from either of its two historical locations.

use serde::Serialize;
use serde_json::Value;

/// A CAD/USD amount pair. Every support line carries both currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Money {
    pub cad: f64,
    pub usd: f64,
}

impl Money {
    pub fn add(self, other: Money) -> Money {
        Money {
            cad: self.cad + other.cad,
            usd: self.usd + other.usd,
        }
    }
}

/// The five support lines shared by the Summary sheet and every region sheet.
///
/// Subtotals and the grand total are derived here and never taken from input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SupportTotals {
    pub food: Money,
    pub salary: Money,
    pub incentive: Money,
    pub family: Money,
    pub medical: Money,
}

impl SupportTotals {
    /// Regular support: food distribution + caseworker salary + incentive.
    pub fn regular_subtotal(&self) -> Money {
        self.food.add(self.salary).add(self.incentive)
    }

    /// Additional support: family gifts + medical gifts.
    pub fn additional_subtotal(&self) -> Money {
        self.family.add(self.medical)
    }

    pub fn grand_total(&self) -> Money {
        self.regular_subtotal().add(self.additional_subtotal())
    }
}

/// One beneficiary's line item in a region's child table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChildDetail {
    pub id: String,
    pub name: String,
    pub food: f64,
    pub medical: f64,
    pub family: f64,
}

impl ChildDetail {
    /// Row total, rounded to two decimal places.
    pub fn row_total(&self) -> f64 {
        round2(self.food + self.medical + self.family)
    }
}

/// A region record. `code` is matched (sanitized, case-insensitively)
/// against sheet names in the template; a record with no matching sheet is
/// skipped, never created.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegionRecord {
    pub code: String,
    pub wire_id: String,
    pub caseworker: String,
    pub beneficiary: String,
    pub region: String,
    pub city: String,
    /// Explicit child count, when the exporter supplies one.
    pub children: Option<u64>,
    pub totals: SupportTotals,
    pub child_details: Vec<ChildDetail>,
}

impl RegionRecord {
    /// Child count cell value: the explicit count when present, otherwise
    /// the length of the child table.
    pub fn child_count(&self) -> u64 {
        self.children.unwrap_or(self.child_details.len() as u64)
    }
}

/// The normalized request payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportPayload {
    pub exchange_rate: f64,
    pub period_from: String,
    pub period_to: String,
    pub total_children: u64,
    pub summary: SupportTotals,
    pub regions: Vec<RegionRecord>,
}

impl ReportPayload {
    /// Normalize arbitrary JSON into a payload. Total: never fails.
    ///
    /// Shape tolerance, in order of preference:
    /// - regions at top-level `regions`, else under `summary.regions`
    /// - exchange rate at top-level `exchangeRate`, else `meta.exchangeRate`
    /// - report period at top level, else under `summary`
    pub fn from_json(value: &Value) -> Self {
        let summary = value.get("summary").unwrap_or(&Value::Null);

        let regions = value
            .get("regions")
            .or_else(|| summary.get("regions"))
            .and_then(Value::as_array)
            .map(|list| list.iter().map(RegionRecord::from_json).collect())
            .unwrap_or_default();

        let exchange_rate = value
            .get("exchangeRate")
            .or_else(|| value.get("meta").and_then(|m| m.get("exchangeRate")))
            .map(coerce_number)
            .unwrap_or(1.0);

        ReportPayload {
            exchange_rate,
            period_from: text(value, &["reportPeriodFrom"])
                .or_else(|| text(summary, &["reportPeriodFrom"]))
                .unwrap_or_default(),
            period_to: text(value, &["reportPeriodTo"])
                .or_else(|| text(summary, &["reportPeriodTo"]))
                .unwrap_or_default(),
            total_children: num(summary, &["totalChildren", "children"]) as u64,
            summary: SupportTotals::from_json(summary, KeySet::Summary),
            regions,
        }
    }
}

impl RegionRecord {
    fn from_json(value: &Value) -> Self {
        RegionRecord {
            code: text(value, &["code", "region"]).unwrap_or_default(),
            wire_id: text(value, &["wireId"]).unwrap_or_default(),
            caseworker: text(value, &["caseworker"]).unwrap_or_default(),
            beneficiary: text(value, &["beneficiary"]).unwrap_or_default(),
            region: text(value, &["region"]).unwrap_or_default(),
            city: text(value, &["city"]).unwrap_or_default(),
            children: value.get("children").and_then(Value::as_u64),
            totals: SupportTotals::from_json(value, KeySet::Region),
            child_details: value
                .get("childDetails")
                .and_then(Value::as_array)
                .map(|list| list.iter().map(ChildDetail::from_json).collect())
                .unwrap_or_default(),
        }
    }
}

impl ChildDetail {
    fn from_json(value: &Value) -> Self {
        ChildDetail {
            id: text(value, &["childId", "id"]).unwrap_or_default(),
            name: text(value, &["childName", "name"]).unwrap_or_default(),
            food: num(value, &["foodDistUSD", "foodDist", "food"]),
            medical: num(value, &["medicalGifts", "medicalGift", "medical"]),
            family: num(value, &["familyGifts", "familyGift", "family"]),
        }
    }
}

/// Which key spellings to use for the gift totals. The summary block uses
/// `familyCADTotal`-style keys, region records use the shorter `familyCAD`
/// forms; both readers accept either.
#[derive(Clone, Copy)]
enum KeySet {
    Summary,
    Region,
}

impl SupportTotals {
    fn from_json(value: &Value, keys: KeySet) -> Self {
        let (family_cad, family_usd, medical_cad, medical_usd): (
            &[&str],
            &[&str],
            &[&str],
            &[&str],
        ) = match keys {
            KeySet::Summary => (
                &["familyCADTotal", "familyCAD"],
                &["familyUSDTotal", "familyUSD"],
                &["medicalCADTotal", "medicalCAD"],
                &["medicalUSDTotal", "medicalUSD"],
            ),
            KeySet::Region => (
                &["familyCAD", "familyCADTotal"],
                &["familyUSD", "familyUSDTotal"],
                &["medicalCAD", "medicalCADTotal"],
                &["medicalUSD", "medicalUSDTotal"],
            ),
        };

        SupportTotals {
            food: money(value, &["foodDistCAD"], &["foodDistUSD"]),
            salary: money(value, &["salaryCAD"], &["salaryUSD"]),
            incentive: money(value, &["incentiveCAD"], &["incentiveUSD"]),
            family: money(value, family_cad, family_usd),
            medical: money(value, medical_cad, medical_usd),
        }
    }
}

/// Round to two decimal places (cell display precision for computed totals).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Coerce a JSON value to f64. Numbers pass through, numeric strings are
/// parsed, everything else is zero. Never fails.
fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// First present key wins; missing everywhere is zero.
fn num(value: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| value.get(key))
        .map(coerce_number)
        .unwrap_or(0.0)
}

fn money(value: &Value, cad_keys: &[&str], usd_keys: &[&str]) -> Money {
    Money {
        cad: num(value, cad_keys),
        usd: num(value, usd_keys),
    }
}

fn text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
