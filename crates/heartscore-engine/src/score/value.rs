//! Raw cell values as delivered by a sheet reader, before coercion.

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell in its as-read form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// The cell does not exist or is empty.
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl RawValue {
    /// Build a value from a text field, mapping blank text to `Absent`.
    pub fn from_text(text: &str) -> RawValue {
        if text.trim().is_empty() {
            RawValue::Absent
        } else {
            RawValue::Text(text.to_string())
        }
    }

    /// Whether the cell carries no usable content.
    pub fn is_absent(&self) -> bool {
        match self {
            RawValue::Absent => true,
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}
