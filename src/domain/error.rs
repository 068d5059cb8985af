//! Validation errors for purchase records.
//!
//! These errors are returned when raw input cannot be turned into a
//! [`Purchase`](super::purchase::Purchase). They never carry partially
//! built records.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use purchase_ledger::domain::error::ValidationError;
//! use purchase_ledger::domain::purchase::Purchase;
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
//! let result = Purchase::try_new("   ", "Canada", date, Decimal::ONE);
//!
//! assert!(matches!(
//!     result,
//!     Err(ValidationError::EmptyField { field: "customer_name" })
//! ));
//! ```

use thiserror::Error;

/// Errors raised when a purchase record fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A text field was empty after trimming.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A required column was absent from the input.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The purchase date did not match the accepted format.
    #[error("invalid purchase_date '{value}': expected {expected}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable description of the accepted format.
        expected: &'static str,
    },

    /// The amount was not a decimal number.
    #[error("invalid amount '{value}': {reason}")]
    InvalidAmount {
        /// The raw value that failed to parse.
        value: String,
        /// Parser message.
        reason: String,
    },
}
