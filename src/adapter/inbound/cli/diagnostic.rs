//! Miette-based diagnostics for rejected purchase files.
//!
//! Renders the offending CSV line with a label and a help suggestion so the
//! user can fix the file in place.

use std::ops::Range;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::domain::ValidationError;

/// A data row that failed validation, with its source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{file}: row {row} was rejected; no later rows were loaded")]
#[diagnostic(code(purchase_ledger::invalid_row))]
pub struct RowDiagnostic {
    /// File the row came from.
    pub file: String,

    /// 1-based data row index.
    pub row: usize,

    /// Full file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte range of the offending line.
    #[label("{reason}")]
    pub span: SourceSpan,

    /// Validation failure shown on the label.
    pub reason: String,

    /// Suggestion for fixing the row.
    #[help]
    pub help: Option<String>,
}

impl RowDiagnostic {
    /// Create a diagnostic for `row` of `file`, pointing at `span`.
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        content: impl Into<String>,
        row: usize,
        span: Range<usize>,
        error: &ValidationError,
    ) -> Self {
        let file = file.into();
        Self {
            src: NamedSource::new(file.clone(), content.into()),
            file,
            row,
            span: span.into(),
            reason: error.to_string(),
            help: help_for(error),
        }
    }
}

/// Header problem in a purchase file.
#[derive(Debug, Error, Diagnostic)]
#[error("{file}: {message}")]
#[diagnostic(
    code(purchase_ledger::header),
    help("the first line must name the columns customer_name, country, purchase_date, amount")
)]
pub struct HeaderDiagnostic {
    /// File with the bad header.
    pub file: String,

    /// Validation failure.
    pub message: String,
}

fn help_for(error: &ValidationError) -> Option<String> {
    match error {
        ValidationError::InvalidDate { expected, .. } => {
            Some(format!("dates are written as {expected}, e.g. 2024-12-05"))
        }
        ValidationError::InvalidAmount { .. } => {
            Some("amounts are plain decimals such as 250.75".to_string())
        }
        ValidationError::MissingField { .. } => {
            Some("every row needs a value for each of the four columns".to_string())
        }
        ValidationError::EmptyField { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_diagnostic_points_at_span() {
        let content = "customer_name,country,purchase_date,amount\nAnn,UK,nope,1\n";
        let error = ValidationError::InvalidDate {
            value: "nope".to_string(),
            expected: "YYYY-MM-DD",
        };
        let diagnostic = RowDiagnostic::new("a.csv", content, 1, 43..57, &error);

        assert_eq!(diagnostic.span.offset(), 43);
        assert_eq!(diagnostic.span.len(), 14);
        assert!(diagnostic.help.as_deref().unwrap().contains("YYYY-MM-DD"));
        assert!(diagnostic.to_string().contains("row 1"));
    }
}
