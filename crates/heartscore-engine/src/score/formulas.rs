//! Per-row derivation formulas for the HEART model.
//!
//! All functions are pure arithmetic over already-coerced inputs and never
//! fail. Percent arguments are whole percentage points (5.2 means 5.2%);
//! inflation alone is a decimal fraction (0.025 means 2.5%), converted at
//! the input boundary by whichever layer reads it.

/// Adjusted per-capita income: PCI discounted by inflation.
///
/// `inflation` is a decimal fraction (0.025 = 2.5%).
pub fn adjusted_pci(pci: f64, inflation: f64) -> f64 {
    pci * (1.0 - inflation)
}

/// Yearly interest payment on the national debt.
///
/// `interest_rate` is in whole percentage points.
pub fn interest_payment(interest_rate: f64, total_debt: f64) -> f64 {
    (interest_rate / 100.0) * total_debt
}

/// Debt plus its interest burden as a percentage of GDP.
///
/// Defined as 0 when GDP is 0: the source data uses 0 for "unknown" and no
/// ratio against a zero denominator is meaningful.
pub fn adjusted_debt_to_gdp(total_debt: f64, interest_payment: f64, gdp: f64) -> f64 {
    if gdp == 0.0 {
        return 0.0;
    }
    ((total_debt + interest_payment) / gdp) * 100.0
}

/// Adjusted HDI: the development index discounted by inequality.
pub fn adjusted_hdi(hdi: f64, gini: f64) -> f64 {
    hdi - gini
}

/// Heart Affordability Value: adjusted income times adjusted development.
pub fn affordability_value(adjusted_pci: f64, adjusted_hdi: f64) -> f64 {
    adjusted_pci * adjusted_hdi
}

/// Raw Heart Value: the signed sum of the seven percent terms.
///
/// Interest payments subtract; everything else adds. Every argument is in
/// whole percentage points — unit consistency is enforced at the parsing
/// boundary, not here.
pub fn raw_heart_value(
    housing_pct: f64,
    health_pct: f64,
    energy_pct: f64,
    education_pct: f64,
    global_gdp_share_pct: f64,
    interest_payment_pct: f64,
    trade_balance_pct: f64,
) -> f64 {
    housing_pct + health_pct + energy_pct + education_pct + global_gdp_share_pct
        - interest_payment_pct
        + trade_balance_pct
}
