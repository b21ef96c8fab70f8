//! Workbook ingestion via calamine (xlsx, xls, xlsb, ods).
//!
//! One-way conversion: the first worksheet's first row is taken as the
//! header row and every following row becomes a `RawRow`. Header cells keep
//! their text verbatim — stray spaces are part of the format contract and
//! are resolved by the alias table, not cleaned up here.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use heartscore_engine::score::RawValue;

use crate::error::{HeartError, Result};
use crate::sheet::RawRow;

/// Read the first worksheet of a workbook into raw rows.
pub fn read_workbook(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(HeartError::EmptySheet)??;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(row) => row.iter().map(header_text).collect(),
        None => return Err(HeartError::EmptySheet),
    };

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let mut row = RawRow::new();
        for (idx, cell) in sheet_row.iter().enumerate() {
            let Some(header) = headers.get(idx) else {
                break;
            };
            row.insert(header, cell_value(cell));
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(HeartError::EmptySheet);
    }
    Ok(rows)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Absent,
        Data::String(s) => RawValue::from_text(s),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Bool(*b),
        // Excel serial dates; no date-typed columns exist in this format,
        // but a numeric cell is still more useful than dropping it.
        Data::DateTime(dt) => RawValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawValue::Text(s.clone()),
        Data::Error(_) => RawValue::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(cell_value(&Data::Empty), RawValue::Absent);
        assert_eq!(cell_value(&Data::Float(2.5)), RawValue::Number(2.5));
        assert_eq!(cell_value(&Data::Int(-3)), RawValue::Number(-3.0));
        assert_eq!(cell_value(&Data::Bool(true)), RawValue::Bool(true));
        assert_eq!(
            cell_value(&Data::String("$1,234".into())),
            RawValue::Text("$1,234".into())
        );
        // Blank strings count as absent, matching the CSV reader.
        assert_eq!(cell_value(&Data::String("  ".into())), RawValue::Absent);
    }

    #[test]
    fn test_header_text_preserves_stray_spaces() {
        assert_eq!(
            header_text(&Data::String(" Country GDP (in USD)".into())),
            " Country GDP (in USD)"
        );
        assert_eq!(header_text(&Data::Empty), "");
    }

    #[test]
    fn test_missing_file_is_a_workbook_error() {
        let err = read_workbook(Path::new("/no/such/file.xlsx")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::HeartError::Workbook(_) | crate::error::HeartError::Io(_)
        ));
    }
}
