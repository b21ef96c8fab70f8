//! The derivation pass: raw rows through coercion and the formulas into
//! finished records.
//!
//! Per-field override precedence applies throughout: a value the sheet
//! author already computed wins verbatim, and the local formula is the
//! fallback for rows where it is missing. The normalized Heart Value is the
//! one field that needs the whole dataset — its empirical bounds come from
//! every row's raw value, so it is filled in a second pass.

use heartscore_engine::score::{
    self, affordability_grade, heart_score, number_or_else, text_or_else, to_currency, to_int,
    to_number, try_number, try_text, Bounds,
};

use super::record::{CountryRecord, GlobalMetrics};
use crate::sheet::{aliases, RawRow};

/// Sentinel in the country column marking the world-aggregate row.
pub const WORLD_SENTINEL: &str = "WORLD";

pub(crate) fn is_world_row(row: &RawRow) -> bool {
    try_text(row.get(aliases::COUNTRY)).is_some_and(|name| name == WORLD_SENTINEL)
}

/// Extract world aggregates from the sentinel row.
///
/// Older sheet revisions repeat the aggregates on every row instead of
/// carrying a WORLD row, so the first row is the fallback source.
pub fn global_metrics(rows: &[RawRow]) -> GlobalMetrics {
    let world = rows.iter().find(|r| is_world_row(r)).or_else(|| rows.first());
    match world {
        Some(row) => GlobalMetrics {
            gdp: to_currency(row.get(aliases::GLOBAL_GDP)),
            population: to_number(row.get(aliases::GLOBAL_POPULATION)),
            trade: to_currency(row.get(aliases::GLOBAL_TRADE)),
        },
        None => GlobalMetrics::default(),
    }
}

/// Derive the full record collection from a row stream.
///
/// The sentinel row seeds [`GlobalMetrics`] and never appears in the output;
/// remaining rows keep their source order. Rows without a country name are
/// dropped.
pub fn derive_records(rows: &[RawRow]) -> (Vec<CountryRecord>, GlobalMetrics) {
    let globals = global_metrics(rows);

    let mut records = Vec::new();
    let mut overrides = Vec::new();
    for row in rows {
        if is_world_row(row) {
            continue;
        }
        let seq_fallback = records.len() as u32 + 1;
        if let Some((record, row_overrides)) = derive_country(row, &globals, seq_fallback) {
            records.push(record);
            overrides.push(row_overrides);
        }
    }

    // Dataset-relative normalization pass. Bounds are observed over every
    // row's raw value, including rows the sheet already normalized.
    let bounds = Bounds::from_observed(records.iter().map(|r| r.heart_value_raw));
    for (record, row_overrides) in records.iter_mut().zip(overrides) {
        record.heart_value = match row_overrides.heart_value {
            Some(from_sheet) => from_sheet,
            None => bounds.map_or(0.0, |b| b.normalize(record.heart_value_raw)),
        };
        record.heart_score = match row_overrides.heart_score {
            Some(from_sheet) => from_sheet,
            None => heart_score(record.heart_value, &record.affordability_ranking),
        };
    }

    (records, globals)
}

/// Sheet-supplied values that can only be merged after the dataset pass.
struct RowOverrides {
    heart_value: Option<f64>,
    heart_score: Option<String>,
}

fn derive_country(
    row: &RawRow,
    globals: &GlobalMetrics,
    seq_fallback: u32,
) -> Option<(CountryRecord, RowOverrides)> {
    let country = try_text(row.get(aliases::COUNTRY))?;

    let pci = to_number(row.get(aliases::PCI));
    // Stored as a decimal fraction in the sheet (0.025 = 2.5%).
    let inflation = to_number(row.get(aliases::INFLATION));
    let interest_rate = to_number(row.get(aliases::INTEREST_RATE));
    let total_debt = to_currency(row.get(aliases::TOTAL_DEBT));
    let gdp = to_currency(row.get(aliases::GDP));
    let hdi = to_number(row.get(aliases::HDI));
    let gini = to_number(row.get(aliases::GINI));

    let adjusted_pci = score::adjusted_pci(pci, inflation);
    let interest_payment = number_or_else(row.get(aliases::INTEREST_PAYMENT), || {
        score::interest_payment(interest_rate, total_debt)
    });
    let adjusted_hdi = number_or_else(row.get(aliases::ADJUSTED_HDI), || {
        score::adjusted_hdi(hdi, gini)
    });
    let affordability_value = number_or_else(row.get(aliases::AFFORDABILITY_VALUE), || {
        score::affordability_value(adjusted_pci, adjusted_hdi)
    });
    let affordability_ranking = text_or_else(row.get(aliases::AFFORDABILITY_RANKING), || {
        affordability_grade(affordability_value).to_string()
    });
    let adjusted_debt_to_gdp = number_or_else(row.get(aliases::ADJUSTED_DEBT_TO_GDP), || {
        score::adjusted_debt_to_gdp(total_debt, interest_payment, gdp)
    });

    let gdp_share_of_global = to_number(row.get(aliases::GDP_SHARE));
    let interest_payment_to_gdp = to_number(row.get(aliases::INTEREST_PAYMENT_TO_GDP));
    let trade_balance_to_gdp = to_number(row.get(aliases::TRADE_BALANCE_TO_GDP));
    let housing_contribution_pct = to_number(row.get(aliases::HOUSING_PCT));
    let health_contribution_pct = to_number(row.get(aliases::HEALTH_PCT));
    let energy_contribution_pct = to_number(row.get(aliases::ENERGY_PCT));
    let education_contribution_pct = to_number(row.get(aliases::EDUCATION_PCT));

    let heart_value_raw = score::raw_heart_value(
        housing_contribution_pct,
        health_contribution_pct,
        energy_contribution_pct,
        education_contribution_pct,
        gdp_share_of_global,
        interest_payment_to_gdp,
        trade_balance_to_gdp,
    );

    let record = CountryRecord {
        seq: number_or_else(row.get(aliases::SR_NO), || f64::from(seq_fallback)) as u32,
        country,

        global_gdp: globals.gdp,
        gdp,
        gdp_global_rank: to_int(row.get(aliases::GDP_RANK)),
        gdp_share_of_global,

        global_population: globals.population,
        population: to_number(row.get(aliases::POPULATION)),
        population_share_of_global: to_number(row.get(aliases::POPULATION_SHARE)),

        per_capita_income: pci,
        inflation,
        adjusted_pci,

        interest_rate,
        total_debt,
        interest_payment,
        adjusted_debt: to_currency(row.get(aliases::ADJUSTED_DEBT)),
        interest_payment_to_gdp,
        adjusted_debt_to_gdp,

        global_trade: globals.trade,
        trade_volume: to_currency(row.get(aliases::TRADE)),
        trade_share_of_global: to_number(row.get(aliases::TRADE_SHARE)),
        trade_contribution_to_gdp: to_number(row.get(aliases::TRADE_CONTRIBUTION_TO_GDP)),
        trade_balance: to_currency(row.get(aliases::TRADE_BALANCE)),
        trade_balance_to_gdp,

        housing_contribution: to_currency(row.get(aliases::HOUSING)),
        housing_contribution_pct,
        housing_units: to_number(row.get(aliases::HOUSING_UNITS)),
        houses_per_person: to_number(row.get(aliases::HOUSES_PER_PERSON)),
        health_contribution: to_currency(row.get(aliases::HEALTH)),
        health_contribution_pct,
        energy_contribution: to_currency(row.get(aliases::ENERGY)),
        energy_contribution_pct,
        education_contribution: to_currency(row.get(aliases::EDUCATION)),
        education_contribution_pct,

        hdi,
        gini,
        adjusted_hdi,
        heart_value_raw,
        // Filled by the dataset-relative pass in derive_records.
        heart_value: 0.0,
        affordability_value,
        affordability_ranking,
        heart_score: String::new(),
        description: try_text(row.get(aliases::DESCRIPTION)).unwrap_or_default(),
    };

    let overrides = RowOverrides {
        heart_value: try_number(row.get(aliases::HEART_VALUE)),
        heart_score: try_text(row.get(aliases::HEART_SCORE)),
    };

    Some((record, overrides))
}

#[cfg(test)]
mod tests {
    use heartscore_engine::score::RawValue;

    use super::*;

    fn row(cells: &[(&str, RawValue)]) -> RawRow {
        let mut r = RawRow::new();
        for (header, value) in cells {
            r.insert(header, value.clone());
        }
        r
    }

    fn world_row() -> RawRow {
        row(&[
            ("COUNTRY", RawValue::Text("WORLD".into())),
            (" Global GDP (in USD)", RawValue::Text("$96,100,000,000,000".into())),
            ("Total Global Population", RawValue::Text("8,045,000,000".into())),
            ("Total Global Trade (in USD)", RawValue::Number(32e12)),
        ])
    }

    fn country_row(name: &str) -> RawRow {
        row(&[
            ("COUNTRY", RawValue::Text(name.into())),
            ("Per Capita income(PCI)", RawValue::Number(50_000.0)),
            ("Country inflation ( %)", RawValue::Number(0.025)),
            ("HDI(Range: 0-1)", RawValue::Number(0.850)),
            ("GINI (Range: 0-1)", RawValue::Number(0.350)),
            ("Housing Contribution to GDP ( %)", RawValue::Number(5.2)),
            ("Health Contribution to GDP ( %)", RawValue::Number(6.5)),
            ("Energy Contribution To GDP  ( %)", RawValue::Number(3.8)),
            ("Education Contribution To GDP ( %)", RawValue::Number(4.2)),
            ("Country GDP ( %)To Global GDP ", RawValue::Number(15.5)),
            ("Intrest Payment to Country GDP( %)", RawValue::Number(2.1)),
            ("Trade balnce to GDP ( %)", RawValue::Number(1.5)),
        ])
    }

    #[test]
    fn test_world_row_seeds_globals_and_is_excluded() {
        let rows = vec![country_row("Norway"), world_row(), country_row("India")];
        let (records, globals) = derive_records(&rows);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.country != "WORLD"));
        assert_eq!(globals.gdp, 96_100_000_000_000.0);
        assert_eq!(globals.population, 8_045_000_000.0);
        assert_eq!(records[0].global_gdp, globals.gdp);
        assert_eq!(records[1].global_trade, 32e12);
    }

    #[test]
    fn test_source_order_is_preserved() {
        let rows = vec![world_row(), country_row("B"), country_row("A"), country_row("C")];
        let (records, _) = derive_records(&rows);
        let names: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
        assert_eq!(records[0].seq, 1);
        assert_eq!(records[2].seq, 3);
    }

    #[test]
    fn test_affordability_chain() {
        let (records, _) = derive_records(&[world_row(), country_row("Norway")]);
        let r = &records[0];
        assert!((r.adjusted_pci - 48_750.0).abs() < 1e-9);
        assert!((r.adjusted_hdi - 0.500).abs() < 1e-9);
        assert!((r.affordability_value - 24_375.0).abs() < 1e-6);
        assert_eq!(r.affordability_ranking, "B-");
    }

    #[test]
    fn test_raw_heart_value_from_percent_columns() {
        let (records, _) = derive_records(&[world_row(), country_row("Norway")]);
        assert!((records[0].heart_value_raw - 34.6).abs() < 1e-9);
    }

    #[test]
    fn test_sheet_overrides_win_per_field() {
        let mut r = country_row("Norway");
        r.insert("Heart  AFFORDABILITY RANKING (HAR)", RawValue::Text("A+".into()));
        r.insert("Heart Value (HV--Range; 0-1)", RawValue::Number(0.76));
        r.insert("HEART SCORE (HV&HAR)", RawValue::Text("0.76A+".into()));
        let (records, _) = derive_records(&[world_row(), r]);
        let rec = &records[0];
        // Grade and score come from the sheet; HAV still computed locally.
        assert_eq!(rec.affordability_ranking, "A+");
        assert_eq!(rec.heart_value, 0.76);
        assert_eq!(rec.heart_score, "0.76A+");
        assert!((rec.affordability_value - 24_375.0).abs() < 1e-6);
    }

    #[test]
    fn test_interest_payment_computed_when_missing() {
        let mut r = country_row("Norway");
        r.insert("Intrest Rate ( %)", RawValue::Number(4.0));
        r.insert("  Country Total Debt (in USD)", RawValue::Text("$1,000,000".into()));
        let (records, _) = derive_records(&[world_row(), r]);
        assert!((records[0].interest_payment - 40_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_interest_payment_override_wins() {
        let mut r = country_row("Norway");
        r.insert("Intrest Rate ( %)", RawValue::Number(4.0));
        r.insert("  Country Total Debt (in USD)", RawValue::Text("$1,000,000".into()));
        r.insert(" Country Interest Payment (in USD)", RawValue::Number(55_000.0));
        let (records, _) = derive_records(&[world_row(), r]);
        assert_eq!(records[0].interest_payment, 55_000.0);
    }

    #[test]
    fn test_zero_gdp_gives_zero_debt_ratio() {
        let mut r = country_row("Atlantis");
        r.insert("  Country Total Debt (in USD)", RawValue::Number(5e12));
        r.insert("Intrest Rate ( %)", RawValue::Number(10.0));
        let (records, _) = derive_records(&[world_row(), r]);
        assert_eq!(records[0].gdp, 0.0);
        assert_eq!(records[0].adjusted_debt_to_gdp, 0.0);
    }

    #[test]
    fn test_dataset_relative_normalization_spans_unit_interval() {
        let mut low = country_row("Low");
        low.insert("Housing Contribution to GDP ( %)", RawValue::Number(0.0));
        low.insert("Country GDP ( %)To Global GDP ", RawValue::Number(0.1));
        let mid = country_row("Mid");
        let mut high = country_row("High");
        high.insert("Country GDP ( %)To Global GDP ", RawValue::Number(25.0));
        let (records, _) = derive_records(&[world_row(), low, mid, high]);
        let min = records.iter().map(|r| r.heart_value).fold(f64::MAX, f64::min);
        let max = records.iter().map(|r| r.heart_value).fold(f64::MIN, f64::max);
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
        assert!(records.iter().all(|r| (0.0..=1.0).contains(&r.heart_value)));
    }

    #[test]
    fn test_single_country_normalizes_to_midpoint() {
        let (records, _) = derive_records(&[world_row(), country_row("Only")]);
        assert_eq!(records[0].heart_value, 0.5);
        assert_eq!(records[0].heart_score, "0.50B-");
    }

    #[test]
    fn test_rows_without_a_country_are_dropped() {
        let blank = row(&[("Per Capita income(PCI)", RawValue::Number(1.0))]);
        let (records, _) = derive_records(&[world_row(), blank, country_row("Norway")]);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_globals_fall_back_to_first_row_without_sentinel() {
        let mut first = country_row("Norway");
        first.insert(" Global GDP (in USD)", RawValue::Number(90e12));
        let (records, globals) = derive_records(&[first, country_row("India")]);
        assert_eq!(globals.gdp, 90e12);
        assert_eq!(records.len(), 2);
    }
}
