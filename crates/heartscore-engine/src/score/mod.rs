//! HEART score computation API.
//!
//! This module provides the pure computational core of the model:
//!
//! - [`RawValue`] - Spreadsheet cell values as read, before coercion
//! - [`to_number`], [`to_currency`] - Total coercion of messy cells to numbers
//! - [`number_or_else`], [`text_or_else`] - Per-field source-override merge
//! - [`adjusted_pci`], [`raw_heart_value`], ... - The derivation formulas
//! - [`affordability_grade`], [`resilience_description`] - Fixed grade tables
//! - [`Bounds`] - Min-max normalization (reference or dataset-relative)
//! - [`CalculatorInput`] - Ad-hoc scoring with unit/mode input conversion
//! - [`format_currency`], [`heart_score`] - Display formatting

mod calculator;
mod coerce;
mod format;
mod formulas;
mod grades;
mod normalize;
mod value;

pub use calculator::{CalculatorInput, InputMode, ScoreBreakdown, Unit};
pub use coerce::{
    number_or_else, text_or_else, to_currency, to_int, to_number, try_currency, try_number,
    try_text,
};
pub use format::{format_count, format_currency, format_percent, heart_score};
pub use formulas::{
    adjusted_debt_to_gdp, adjusted_hdi, adjusted_pci, affordability_value, interest_payment,
    raw_heart_value,
};
pub use grades::{
    affordability_grade, resilience_description, AffordabilityGrade, ResilienceGrade,
    AFFORDABILITY_GRADES, RESILIENCE_GRADES,
};
pub use normalize::Bounds;
pub use value::RawValue;
