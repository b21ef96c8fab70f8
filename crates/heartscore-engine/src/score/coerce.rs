//! Cell coercion: loosely-typed spreadsheet cells into clean numbers.
//!
//! The source sheets encode "unknown" as blank cells and format money as
//! strings with `$` and thousands separators. The `to_*` functions are
//! therefore total: absent, blank, or unparseable input coerces to 0 rather
//! than an error. The `try_*` variants expose presence, which is what the
//! per-field override precedence is built on.

use regex::Regex;

use super::value::RawValue;

/// Try to read a cell as a plain number.
///
/// Accepts numeric cells, booleans (1/0), and numeric strings with stray
/// whitespace or thousands-separator commas. Returns `None` for absent,
/// blank, or non-numeric content.
pub fn try_number(value: &RawValue) -> Option<f64> {
    parse_stripped(value, r"[,\s]")
}

/// Try to read a cell as a currency amount.
///
/// Same contract as [`try_number`], additionally stripping a currency
/// symbol: `"$1,234.50"` parses as `1234.5`.
pub fn try_currency(value: &RawValue) -> Option<f64> {
    parse_stripped(value, r"[$,\s]")
}

/// Try to read a cell as trimmed, non-empty text.
pub fn try_text(value: &RawValue) -> Option<String> {
    match value {
        RawValue::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Coerce a cell to a number; anything unusable becomes 0.
pub fn to_number(value: &RawValue) -> f64 {
    try_number(value).unwrap_or(0.0)
}

/// Coerce a currency cell to a number; anything unusable becomes 0.
pub fn to_currency(value: &RawValue) -> f64 {
    try_currency(value).unwrap_or(0.0)
}

/// Coerce a cell to a non-negative integer (sequence numbers, rankings).
pub fn to_int(value: &RawValue) -> u32 {
    to_number(value).max(0.0) as u32
}

/// Merge a source cell with a locally computed numeric fallback.
///
/// A parseable numeric cell is authoritative and wins verbatim; absent,
/// blank, or unparseable cells defer to the computation. Applied per field,
/// never as an all-or-nothing switch.
pub fn number_or_else(value: &RawValue, fallback: impl FnOnce() -> f64) -> f64 {
    try_number(value).unwrap_or_else(fallback)
}

/// Text counterpart of [`number_or_else`] for pre-computed grade and score
/// strings carried in the sheet.
pub fn text_or_else(value: &RawValue, fallback: impl FnOnce() -> String) -> String {
    try_text(value).unwrap_or_else(fallback)
}

fn parse_stripped(value: &RawValue, strip: &str) -> Option<f64> {
    match value {
        RawValue::Absent => None,
        RawValue::Number(n) => Some(*n),
        RawValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        RawValue::Text(s) => {
            let re = Regex::new(strip).unwrap();
            let cleaned = re.replace_all(s, "");
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}
