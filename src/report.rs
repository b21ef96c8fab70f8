//! Markdown report export.

use std::io::Write;
use std::path::Path;

use heartscore_core::Dataset;
use heartscore_engine::score::{
    format_count, format_currency, format_percent, resilience_description,
};

/// Write the dataset as a markdown document: the world aggregates followed
/// by one table row per country in source order.
pub fn write_markdown(path: &Path, dataset: &Dataset) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    let globals = dataset.global_metrics();

    writeln!(file, "# HEART Scores")?;
    writeln!(file)?;
    writeln!(file, "- Global GDP: {}", format_currency(globals.gdp))?;
    writeln!(file, "- Global population: {}", format_count(globals.population))?;
    writeln!(file, "- Global trade: {}", format_currency(globals.trade))?;
    writeln!(file)?;

    writeln!(
        file,
        "| # | Country | GDP | Population | PCI | Inflation | HDI | GINI | HV | HAR | HEART Score | Resilience |"
    )?;
    writeln!(
        file,
        "|---|---|---|---|---|---|---|---|---|---|---|---|"
    )?;

    for r in dataset.records() {
        writeln!(
            file,
            "| {} | {} | {} | {} | {} | {} | {:.3} | {:.3} | {:.2} | {} | {} | {} |",
            r.seq,
            escape_markdown(&r.country),
            format_currency(r.gdp),
            format_count(r.population),
            format_currency(r.per_capita_income),
            format_percent(r.inflation, false),
            r.hdi,
            r.gini,
            r.heart_value,
            r.affordability_ranking,
            r.heart_score,
            resilience_description(r.heart_value),
        )?;
    }

    Ok(())
}

/// Escape characters that would break a markdown table cell.
fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use heartscore_core::{Dataset, RawValue};
    use heartscore_core::sheet::RawRow;

    use super::*;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("plain"), "plain");
        assert_eq!(escape_markdown("a|b"), "a\\|b");
    }

    #[test]
    fn test_report_contains_countries_but_not_world() {
        let mut world = RawRow::new();
        world.insert("COUNTRY", RawValue::Text("WORLD".into()));
        world.insert(" Global GDP (in USD)", RawValue::Number(96.1e12));
        let mut norway = RawRow::new();
        norway.insert("COUNTRY", RawValue::Text("Norway".into()));
        norway.insert("Per Capita income(PCI)", RawValue::Number(89_000.0));
        let dataset = Dataset::from_rows(&[world, norway]).unwrap();

        let path = std::env::temp_dir().join(format!(
            "heartscore_report_{}_{:?}.md",
            std::process::id(),
            std::thread::current().id(),
        ));
        struct Cleanup(std::path::PathBuf);
        impl Drop for Cleanup {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.0);
            }
        }
        let _cleanup = Cleanup(path.clone());

        write_markdown(&path, &dataset).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("| Norway |"));
        assert!(contents.contains("$96.10T"));
        assert!(!contents.contains("| WORLD |"));
    }
}
