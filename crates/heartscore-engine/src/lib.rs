//! heartscore-engine - HEART score formulas, grading, and cell coercion.

pub mod score;

#[cfg(test)]
mod tests {
    use crate::score::*;

    // End-to-end scenarios across the module boundaries, mirroring the
    // worked examples in the model documentation.

    #[test]
    fn test_affordability_chain_from_raw_inputs() {
        let apci = adjusted_pci(50_000.0, 0.025);
        let ahdi = adjusted_hdi(0.850, 0.350);
        let hav = affordability_value(apci, ahdi);
        assert!((hav - 24_375.0).abs() < 1e-6);
        assert_eq!(affordability_grade(hav), "B-");
    }

    #[test]
    fn test_heart_value_chain_with_reference_bounds() {
        let raw = raw_heart_value(5.2, 6.5, 3.8, 4.2, 15.5, 2.1, 1.5);
        assert!((raw - 34.6).abs() < 1e-9);
        let normalized = Bounds::REFERENCE.normalize(raw);
        assert!((normalized - 0.637).abs() < 1e-3);
        assert_eq!(heart_score(normalized, "B-"), "0.64B-");
    }

    #[test]
    fn test_coerced_cells_feed_formulas() {
        let pci = to_number(&RawValue::Text("50,000".into()));
        let inflation = to_number(&RawValue::Number(0.025));
        assert!((adjusted_pci(pci, inflation) - 48_750.0).abs() < 1e-6);

        let debt = to_currency(&RawValue::Text("$1,000,000".into()));
        let ip = interest_payment(4.0, debt);
        assert!((ip - 40_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_adjusted_pci_below_pci_under_positive_inflation() {
        // Unit-confusion tripwire: inflation is a decimal fraction here.
        for pci in [1_000.0, 30_000.0, 90_000.0] {
            for inflation in [0.005, 0.02, 0.12] {
                assert!(adjusted_pci(pci, inflation) < pci);
            }
        }
    }

    #[test]
    fn test_zero_gdp_never_poisons_downstream_values() {
        let ratio = adjusted_debt_to_gdp(5e12, 2e11, 0.0);
        assert_eq!(ratio, 0.0);
        let raw = raw_heart_value(0.0, 0.0, 0.0, 0.0, 0.0, ratio, 0.0);
        assert!(Bounds::REFERENCE.normalize(raw).is_finite());
    }
}
