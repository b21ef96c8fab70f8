//! Sheet ingestion: raw rows out of workbooks and CSV exports.

use std::path::Path;

use crate::error::{HeartError, Result};

pub mod aliases;
mod csv;
mod row;
mod xlsx;

pub use csv::read_csv;
pub use row::RawRow;
pub use xlsx::read_workbook;

/// Read a data file, choosing the reader by extension.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => read_csv(path),
        Some("xlsx") | Some("xls") | Some("xlsb") | Some("ods") => read_workbook(path),
        other => Err(HeartError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}
