//! One spreadsheet row as an opaque header-to-cell mapping.

use std::collections::HashMap;

use heartscore_engine::score::RawValue;

/// A raw sheet row: header text (verbatim, stray spaces included) mapped to
/// the cell value underneath it. Ephemeral; produced by a sheet reader and
/// consumed once by the derivation pass.
#[derive(Clone, Debug, Default)]
pub struct RawRow {
    cells: HashMap<String, RawValue>,
}

impl RawRow {
    pub fn new() -> RawRow {
        RawRow { cells: HashMap::new() }
    }

    /// Insert a cell under its verbatim header. Blank headers are dropped;
    /// headers that merely carry stray spaces are kept as-is, since the
    /// alias table matches them literally.
    pub fn insert(&mut self, header: &str, value: RawValue) {
        if header.trim().is_empty() {
            return;
        }
        self.cells.insert(header.to_string(), value);
    }

    /// Resolve a logical field against an ordered list of accepted header
    /// spellings, returning the first present, non-absent match.
    pub fn get(&self, aliases: &[&str]) -> &RawValue {
        for alias in aliases {
            if let Some(value) = self.cells.get(*alias) {
                if !value.is_absent() {
                    return value;
                }
            }
        }
        &RawValue::Absent
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() || self.cells.values().all(RawValue::is_absent)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
