//! Related Publications Upload
//!
//! Parses a viewer-supplied CSV into a display table. No schema is assumed:
//! every column is read as a string so cell values reach the page exactly
//! as uploaded. The table lives only in the render that received it.

use std::io::Cursor;

use anyhow::{Context, Result};
use polars::prelude::*;

/// Parsed publications table: named columns by row-major string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationsTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PublicationsTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Parse uploaded CSV bytes into a [`PublicationsTable`].
///
/// Schema inference is disabled so values are not reinterpreted (a year
/// stays `"2021"`, a price stays `"1.50"`).
pub fn parse_publications(bytes: &[u8]) -> Result<PublicationsTable> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()
        .context("Failed to parse uploaded CSV")?;

    let columns: Vec<String> = df.get_column_names().iter().map(|c| c.to_string()).collect();

    let series = df.get_columns();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Vec::with_capacity(series.len());
        for column in series {
            let value = column
                .get(idx)
                .with_context(|| format!("Row {} out of bounds", idx))?;
            row.push(cell_to_string(value));
        }
        rows.push(row);
    }

    Ok(PublicationsTable { columns, rows })
}

/// Format a cell without the quoting Polars applies to string values in
/// its `Display` output.
fn cell_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let csv = b"title,year,doi\nTopic models for tweets,2021,10.1000/xyz\nLDA at scale,2019,10.1000/abc\n";
        let table = parse_publications(csv).unwrap();

        assert_eq!(table.columns, vec!["title", "year", "doi"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows[0],
            vec!["Topic models for tweets", "2021", "10.1000/xyz"]
        );
        assert_eq!(table.rows[1], vec!["LDA at scale", "2019", "10.1000/abc"]);
    }

    #[test]
    fn test_values_not_reinterpreted() {
        let csv = b"title,score\nA,1.50\n";
        let table = parse_publications(csv).unwrap();
        assert_eq!(table.rows[0][1], "1.50");
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let csv = b"title,venue\n\"Topics, trends and tweets\",JASIST\n";
        let table = parse_publications(csv).unwrap();
        assert_eq!(table.rows[0][0], "Topics, trends and tweets");
    }

    #[test]
    fn test_header_only() {
        let csv = b"title,year\n";
        let table = parse_publications(csv).unwrap();
        assert_eq!(table.columns, vec!["title", "year"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_malformed_is_error() {
        let csv = b"title,year\nonly one,2020,extra,fields,here\n";
        assert!(parse_publications(csv).is_err());
    }
}
