//! The derived per-country record and the world aggregates.

use serde::{Deserialize, Serialize};

/// One country's full set of source and derived metrics.
///
/// Immutable once constructed: the derivation pass builds the complete
/// record, and consumers only ever read it. Currency amounts are USD,
/// percent fields are whole percentage points, and `inflation` alone is a
/// decimal fraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    // Identity
    pub seq: u32,
    pub country: String,

    // GDP
    pub global_gdp: f64,
    pub gdp: f64,
    pub gdp_global_rank: u32,
    pub gdp_share_of_global: f64,

    // Population
    pub global_population: f64,
    pub population: f64,
    pub population_share_of_global: f64,

    // Income and inflation
    pub per_capita_income: f64,
    pub inflation: f64,
    pub adjusted_pci: f64,

    // Debt and interest
    pub interest_rate: f64,
    pub total_debt: f64,
    pub interest_payment: f64,
    pub adjusted_debt: f64,
    pub interest_payment_to_gdp: f64,
    pub adjusted_debt_to_gdp: f64,

    // Trade
    pub global_trade: f64,
    pub trade_volume: f64,
    pub trade_share_of_global: f64,
    pub trade_contribution_to_gdp: f64,
    pub trade_balance: f64,
    pub trade_balance_to_gdp: f64,

    // Sector contributions
    pub housing_contribution: f64,
    pub housing_contribution_pct: f64,
    pub housing_units: f64,
    pub houses_per_person: f64,
    pub health_contribution: f64,
    pub health_contribution_pct: f64,
    pub energy_contribution: f64,
    pub energy_contribution_pct: f64,
    pub education_contribution: f64,
    pub education_contribution_pct: f64,

    // Composite scores
    pub hdi: f64,
    pub gini: f64,
    pub adjusted_hdi: f64,
    /// Signed sum of the seven percent terms, before normalization.
    pub heart_value_raw: f64,
    /// Normalized Heart Value in [0, 1].
    pub heart_value: f64,
    pub affordability_value: f64,
    pub affordability_ranking: String,
    /// Display score: normalized Heart Value to two decimals plus the grade.
    pub heart_score: String,
    pub description: String,
}

/// World-level aggregates, read once from the sentinel row and copied onto
/// every record's `global_*` fields for per-row access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetrics {
    pub gdp: f64,
    pub population: f64,
    pub trade: f64,
}
