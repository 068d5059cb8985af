//! Delimited-text reader for bulk purchase input.
//!
//! Turns CSV text into [`PurchaseRow`]s without interpreting any values;
//! parsing and validation happen in the ledger so that a bad row aborts the
//! batch at that row.
//!
//! Accepted shape:
//!
//! ```text
//! customer_name,country,purchase_date,amount
//! Alice Person,Canada,2024-12-05,250.75
//! "Smith, Bob",UK,2024-12-06,320.40
//! ```
//!
//! Header names are matched ignoring case and surrounding whitespace, in any
//! column order; extra columns are ignored. Fields are trimmed, quoted
//! fields may span lines, and blank lines are skipped. A row with fewer
//! fields than the header leaves the missing columns unset.

use std::collections::HashMap;
use std::ops::Range;

use ::csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::{PurchaseRow, ValidationError};
use crate::error::Result;

const COLUMNS: [&str; 4] = ["customer_name", "country", "purchase_date", "amount"];

/// Rows read from one CSV document, with their source locations.
#[derive(Debug, Clone, Default)]
pub struct CsvDocument {
    rows: Vec<PurchaseRow>,
    spans: Vec<Range<usize>>,
}

impl CsvDocument {
    /// Parse CSV text.
    ///
    /// Fails with [`ValidationError::MissingField`] if the header lacks one
    /// of the required columns, or if there is no header at all, and with
    /// [`Error::Csv`](crate::error::Error::Csv) on malformed input.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let positions = column_positions(reader.headers()?)?;

        let mut document = Self::default();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            if record.iter().all(str::is_empty) {
                continue;
            }
            let start = record.position().map_or(0, |p| p.byte() as usize);
            let end = reader.position().byte() as usize;

            let field = |name: &str| {
                positions
                    .get(name)
                    .and_then(|&i| record.get(i))
                    .map(str::to_string)
            };
            document.rows.push(PurchaseRow {
                customer_name: field("customer_name"),
                country: field("country"),
                purchase_date: field("purchase_date"),
                amount: field("amount"),
            });
            document.spans.push(trimmed_span(text, start, end));
        }
        Ok(document)
    }

    /// Data rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[PurchaseRow] {
        &self.rows
    }

    /// Consume the document, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<PurchaseRow> {
        self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Byte range of a 1-based data row in the source text.
    #[must_use]
    pub fn span_of_row(&self, row: usize) -> Option<Range<usize>> {
        row.checked_sub(1)
            .and_then(|index| self.spans.get(index))
            .cloned()
    }
}

fn column_positions(headers: &StringRecord) -> Result<HashMap<&'static str, usize>> {
    let mut positions = HashMap::new();
    for column in COLUMNS {
        let index = headers
            .iter()
            .position(|name| {
                name.trim_start_matches('\u{feff}')
                    .trim()
                    .eq_ignore_ascii_case(column)
            })
            .ok_or(ValidationError::MissingField { field: column })?;
        positions.insert(column, index);
    }
    Ok(positions)
}

/// Record bytes without surrounding whitespace or line terminators.
fn trimmed_span(text: &str, start: usize, end: usize) -> Range<usize> {
    let Some(raw) = text.get(start..end.min(text.len())) else {
        return start..start;
    };
    let leading = raw.len() - raw.trim_start().len();
    start + leading..start + raw.trim_end().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn reads_rows_in_header_order() {
        let text = "customer_name,country,purchase_date,amount\n\
                    Alice Person,Canada,2024-12-05,250.75\n\
                    Bob Smith,UK,2024-12-06,320.40\n";
        let document = CsvDocument::parse(text).unwrap();

        assert_eq!(document.len(), 2);
        assert_eq!(
            document.rows()[0],
            PurchaseRow::new("Alice Person", "Canada", "2024-12-05", "250.75")
        );
    }

    #[test]
    fn header_columns_may_be_reordered_and_padded() {
        let text = "Amount , PURCHASE_DATE,extra, country,customer_name\r\n12,2024-01-02,x,UK,Ann\r\n";
        let document = CsvDocument::parse(text).unwrap();

        assert_eq!(
            document.rows()[0],
            PurchaseRow::new("Ann", "UK", "2024-01-02", "12")
        );
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let text = "customer_name,country,purchase_date,amount\n\"Smith, \"\"Bob\"\"\",UK,2024-12-06,1\n";
        let document = CsvDocument::parse(text).unwrap();
        assert_eq!(
            document.rows()[0].customer_name.as_deref(),
            Some("Smith, \"Bob\"")
        );
    }

    #[test]
    fn quoted_field_may_span_lines() {
        let text = "customer_name,country,purchase_date,amount\n\"Ann\nLee\",UK,2024-01-02,1\nBob,US,2024-01-03,2\n";
        let document = CsvDocument::parse(text).unwrap();

        assert_eq!(document.len(), 2);
        assert_eq!(
            document.rows()[0],
            PurchaseRow::new("Ann\nLee", "UK", "2024-01-02", "1")
        );
        let span = document.span_of_row(1).unwrap();
        assert_eq!(&text[span], "\"Ann\nLee\",UK,2024-01-02,1");
    }

    #[test]
    fn fields_are_trimmed() {
        let text = "customer_name,country,purchase_date,amount\n  Ann , UK ,2024-01-02 , 1.50\n";
        let document = CsvDocument::parse(text).unwrap();
        assert_eq!(
            document.rows()[0],
            PurchaseRow::new("Ann", "UK", "2024-01-02", "1.50")
        );
    }

    #[test]
    fn short_row_leaves_columns_unset() {
        let text = "customer_name,country,purchase_date,amount\nAnn,UK\n";
        let doc = CsvDocument::parse(text).unwrap();
        let row = &doc.rows()[0];

        assert_eq!(row.country.as_deref(), Some("UK"));
        assert_eq!(row.purchase_date, None);
        assert_eq!(row.amount, None);
    }

    #[test]
    fn missing_header_column_is_rejected() {
        let err = CsvDocument::parse("customer_name,country,amount\nAnn,UK,1\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField {
                field: "purchase_date"
            })
        ));
    }

    #[test]
    fn empty_text_has_no_header() {
        assert!(CsvDocument::parse("").is_err());
    }

    #[test]
    fn blank_lines_are_skipped_and_spans_point_at_rows() {
        let text = "customer_name,country,purchase_date,amount\n\nAnn,UK,2024-01-02,1\n";
        let document = CsvDocument::parse(text).unwrap();

        assert_eq!(document.len(), 1);
        let span = document.span_of_row(1).unwrap();
        assert_eq!(&text[span], "Ann,UK,2024-01-02,1");
        assert_eq!(document.span_of_row(0), None);
        assert_eq!(document.span_of_row(2), None);
    }
}
