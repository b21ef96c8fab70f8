//! CSV ingestion.
//!
//! The HEART sheet circulates as a CSV export as often as a workbook, so the
//! CSV reader produces the same `RawRow` stream as the xlsx path. The line
//! parser handles quoted fields and escaped quotes; quoting preserves the
//! leading/trailing whitespace that some header cells legitimately carry.

use std::path::Path;

use heartscore_engine::score::RawValue;

use crate::error::{HeartError, Result};
use crate::sheet::RawRow;

/// Parse a CSV file into raw rows. The first line is the header row.
pub fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_content(&content)
}

pub(crate) fn parse_csv_content(content: &str) -> Result<Vec<RawRow>> {
    let mut lines = content.lines();
    let headers = match lines.next() {
        Some(line) => parse_csv_line(line),
        None => return Err(HeartError::EmptySheet),
    };

    let mut rows = Vec::new();
    for line in lines {
        let mut row = RawRow::new();
        for (idx, field) in parse_csv_line(line).into_iter().enumerate() {
            let Some(header) = headers.get(idx) else {
                break;
            };
            row.insert(header, parse_csv_field(&field));
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(HeartError::EmptySheet);
    }
    Ok(rows)
}

/// Parse a single CSV line, handling quoted fields
pub(crate) fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    field_was_quoted = true;
                }
                ',' => {
                    if field_was_quoted {
                        fields.push(current.clone());
                    } else {
                        fields.push(current.trim().to_string());
                    }
                    current = String::new();
                    field_was_quoted = false;
                }
                _ => current.push(c),
            }
        }
    }
    if field_was_quoted {
        fields.push(current);
    } else {
        fields.push(current.trim().to_string());
    }
    fields
}

/// Parse a CSV field into a raw value.
/// Numbers that parse cleanly become `Number`; currency strings and anything
/// else stay `Text` for the coercion layer to deal with.
pub(crate) fn parse_csv_field(field: &str) -> RawValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return RawValue::Absent;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return RawValue::Number(n);
    }
    RawValue::from_text(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::aliases;

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(parse_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_quoted_field_with_comma() {
        assert_eq!(
            parse_csv_line(r#"India,"$3,700,000,000,000",7.2"#),
            vec!["India", "$3,700,000,000,000", "7.2"]
        );
    }

    #[test]
    fn test_parse_csv_line_quoted_preserves_whitespace() {
        assert_eq!(
            parse_csv_line(r#"" Country GDP (in USD)",x"#),
            vec![" Country GDP (in USD)", "x"]
        );
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        assert_eq!(
            parse_csv_line(r#"a,"say ""hello""",c"#),
            vec!["a", r#"say "hello""#, "c"]
        );
    }

    #[test]
    fn test_parse_csv_field_types() {
        assert_eq!(parse_csv_field("42"), RawValue::Number(42.0));
        assert_eq!(parse_csv_field("0.025"), RawValue::Number(0.025));
        assert_eq!(parse_csv_field(""), RawValue::Absent);
        assert_eq!(parse_csv_field("  "), RawValue::Absent);
        assert_eq!(
            parse_csv_field("$1,234.50"),
            RawValue::Text("$1,234.50".into())
        );
    }

    #[test]
    fn test_parse_content_maps_headers_to_cells() {
        let content = "\
COUNTRY,Per Capita income(PCI),HDI(Range: 0-1)
Norway,89000,0.961
India,2400,0.633
";
        let rows = parse_csv_content(content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1].get(aliases::PCI),
            &RawValue::Number(2400.0)
        );
        assert_eq!(
            rows[0].get(aliases::HDI),
            &RawValue::Number(0.961)
        );
    }

    #[test]
    fn test_parse_content_quoted_spaced_headers() {
        let content = "\
COUNTRY,\" Country GDP (in USD)\"
Norway,\"$485,000,000,000\"
";
        let rows = parse_csv_content(content).unwrap();
        assert_eq!(
            rows[0].get(aliases::GDP),
            &RawValue::Text("$485,000,000,000".into())
        );
    }

    #[test]
    fn test_empty_content_is_an_error() {
        assert!(matches!(
            parse_csv_content(""),
            Err(HeartError::EmptySheet)
        ));
        assert!(matches!(
            parse_csv_content("COUNTRY,GDP\n"),
            Err(HeartError::EmptySheet)
        ));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let content = "COUNTRY,HDI(Range: 0-1)\nNorway,0.961\n,,\n\n";
        let rows = parse_csv_content(content).unwrap();
        assert_eq!(rows.len(), 1);
    }
}
