//! Ad-hoc score calculation from manual input.
//!
//! Runs the exact batch formulas over free-form numeric entry. The only
//! differences from dataset ingestion are input ergonomics (a unit
//! multiplier and a percentage-vs-absolute entry mode) and the fixed
//! reference normalization bounds, since no dataset is in scope here.

use serde::{Deserialize, Serialize};

use super::format::heart_score;
use super::formulas;
use super::grades::affordability_grade;
use super::normalize::Bounds;

/// Magnitude multiplier for absolute-value entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Unit {
    pub fn multiplier(self) -> f64 {
        match self {
            Unit::Thousand => 1e3,
            Unit::Million => 1e6,
            Unit::Billion => 1e9,
            Unit::Trillion => 1e12,
        }
    }

    /// Parse the single-letter form used on the command line (K/M/B/T).
    pub fn parse(s: &str) -> Option<Unit> {
        match s.trim().to_ascii_uppercase().as_str() {
            "K" => Some(Unit::Thousand),
            "M" => Some(Unit::Million),
            "B" => Some(Unit::Billion),
            "T" => Some(Unit::Trillion),
            _ => None,
        }
    }
}

/// How the sector and share terms are entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Terms are whole percentage points of GDP.
    Percentage,
    /// Terms are absolute amounts in the selected unit, converted against
    /// the supplied GDP.
    Absolute,
}

impl InputMode {
    pub fn parse(s: &str) -> Option<InputMode> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" | "pct" => Some(InputMode::Percentage),
            "absolute" | "abs" => Some(InputMode::Absolute),
            _ => None,
        }
    }
}

/// Manual entry for one score calculation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub mode: InputMode,
    pub unit: Unit,
    /// GDP in `unit` scale; the denominator for absolute-mode conversion.
    pub gdp: f64,
    pub housing: f64,
    pub health: f64,
    pub energy: f64,
    pub education: f64,
    /// Share of world GDP; always whole percentage points regardless of mode.
    pub global_gdp_share: f64,
    pub interest_payment: f64,
    pub trade_balance: f64,
    pub pci: f64,
    /// Inflation in whole percentage points, as typed; converted to a
    /// decimal fraction before the formulas see it.
    pub inflation: f64,
    pub hdi: f64,
    pub gini: f64,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        CalculatorInput {
            mode: InputMode::Percentage,
            unit: Unit::Billion,
            gdp: 0.0,
            housing: 0.0,
            health: 0.0,
            energy: 0.0,
            education: 0.0,
            global_gdp_share: 0.0,
            interest_payment: 0.0,
            trade_balance: 0.0,
            pci: 0.0,
            inflation: 0.0,
            hdi: 0.0,
            gini: 0.0,
        }
    }
}

/// Every derived figure from one calculation.
#[derive(Clone, Debug, Serialize)]
pub struct ScoreBreakdown {
    pub raw_heart_value: f64,
    /// Normalized Heart Value in [0, 1].
    pub heart_value: f64,
    pub adjusted_pci: f64,
    pub adjusted_hdi: f64,
    pub affordability_value: f64,
    pub grade: &'static str,
    pub heart_score: String,
}

impl CalculatorInput {
    /// Convert one sector/share term to whole percentage points.
    ///
    /// In absolute mode a GDP of 0 yields 0, matching the coercion layer's
    /// treatment of unknown denominators.
    fn term_pct(&self, value: f64) -> f64 {
        match self.mode {
            InputMode::Percentage => value,
            InputMode::Absolute => {
                let gdp = self.gdp * self.unit.multiplier();
                if gdp == 0.0 {
                    return 0.0;
                }
                (value * self.unit.multiplier() / gdp) * 100.0
            }
        }
    }

    /// Evaluate with explicit normalization bounds.
    pub fn evaluate_with_bounds(&self, bounds: Bounds) -> ScoreBreakdown {
        let raw_heart_value = formulas::raw_heart_value(
            self.term_pct(self.housing),
            self.term_pct(self.health),
            self.term_pct(self.energy),
            self.term_pct(self.education),
            self.global_gdp_share,
            self.term_pct(self.interest_payment),
            self.term_pct(self.trade_balance),
        );
        let heart_value = bounds.normalize(raw_heart_value);

        let adjusted_pci = formulas::adjusted_pci(self.pci, self.inflation / 100.0);
        let adjusted_hdi = formulas::adjusted_hdi(self.hdi, self.gini);
        let affordability_value = formulas::affordability_value(adjusted_pci, adjusted_hdi);
        let grade = affordability_grade(affordability_value);

        ScoreBreakdown {
            raw_heart_value,
            heart_value,
            adjusted_pci,
            adjusted_hdi,
            affordability_value,
            grade,
            heart_score: heart_score(heart_value, grade),
        }
    }

    /// Evaluate against the fixed reference bounds.
    pub fn evaluate(&self) -> ScoreBreakdown {
        self.evaluate_with_bounds(Bounds::REFERENCE)
    }
}
