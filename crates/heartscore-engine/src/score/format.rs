//! Display formatting for derived metrics.

/// Format a currency amount with a magnitude suffix ("$1.23T", "-$500.00M").
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{sign}${:.2}T", abs / 1e12)
    } else if abs >= 1e9 {
        format!("{sign}${:.2}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{sign}${:.2}M", abs / 1e6)
    } else if abs >= 1e3 {
        format!("{sign}${:.2}K", abs / 1e3)
    } else {
        format!("{sign}${abs:.2}")
    }
}

/// Format a percentage to two decimals.
///
/// `already_percent` distinguishes whole percentage points (2.35) from
/// decimal fractions (0.0235); the sheet stores both, depending on column.
pub fn format_percent(value: f64, already_percent: bool) -> String {
    let pct = if already_percent { value } else { value * 100.0 };
    format!("{pct:.2}%")
}

/// Format a unit count with a magnitude suffix ("145M", "2B").
pub fn format_count(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.0}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.0}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.0}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Assemble the final HEART score string: normalized Heart Value to exactly
/// two decimals, concatenated with the affordability grade ("0.76C").
pub fn heart_score(heart_value: f64, grade: &str) -> String {
    format!("{heart_value:.2}{grade}")
}
