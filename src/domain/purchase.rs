//! The purchase record.
//!
//! A [`Purchase`] is the only entity in the ledger: one customer buying
//! something in one country on one day for one amount. Records are
//! immutable once built; the only way to get one is through validation.
//!
//! Two input shapes feed it:
//!
//! - [`NewPurchase`] - already-typed fields, as a request body would carry
//! - [`PurchaseRow`] - raw text fields, as a delimited file row carries

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Accepted calendar format for purchase dates in text input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_FORMAT_HINT: &str = "YYYY-MM-DD";

/// A single validated purchase event.
///
/// Text fields are stored trimmed and are never empty. There is no identity
/// beyond the field values: two purchases with equal fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NewPurchase")]
pub struct Purchase {
    customer_name: String,
    country: String,
    purchase_date: NaiveDate,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    amount: Decimal,
}

impl Purchase {
    /// Create a purchase with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `customer_name` must be non-empty after trimming
    /// - `country` must be non-empty after trimming
    ///
    /// The amount is not checked for sign.
    pub fn try_new(
        customer_name: impl AsRef<str>,
        country: impl AsRef<str>,
        purchase_date: NaiveDate,
        amount: Decimal,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            customer_name: non_empty("customer_name", customer_name.as_ref())?,
            country: non_empty("country", country.as_ref())?,
            purchase_date,
            amount,
        })
    }

    /// Parse a raw text row into a purchase.
    ///
    /// Fields are trimmed before parsing. The date must be `YYYY-MM-DD` and
    /// the amount a plain decimal number.
    pub fn from_row(row: &PurchaseRow) -> Result<Self, ValidationError> {
        let customer_name = required("customer_name", row.customer_name.as_deref())?;
        let country = required("country", row.country.as_deref())?;
        let purchase_date = parse_date(required("purchase_date", row.purchase_date.as_deref())?)?;
        let amount = parse_amount(required("amount", row.amount.as_deref())?)?;

        Self::try_new(customer_name, country, purchase_date, amount)
    }

    /// Get the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Get the country as stored.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Get the purchase date.
    #[must_use]
    pub const fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Get the purchase amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// True if this purchase was made in `country`, ignoring case.
    #[must_use]
    pub fn is_in_country(&self, country: &str) -> bool {
        self.country.to_lowercase() == country.to_lowercase()
    }
}

impl TryFrom<NewPurchase> for Purchase {
    type Error = ValidationError;

    fn try_from(input: NewPurchase) -> Result<Self, Self::Error> {
        Self::try_new(
            input.customer_name,
            input.country,
            input.purchase_date,
            input.amount,
        )
    }
}

/// Typed input for a single insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPurchase {
    pub customer_name: String,
    pub country: String,
    pub purchase_date: NaiveDate,
    pub amount: Decimal,
}

impl NewPurchase {
    /// Create a new insert request.
    pub fn new(
        customer_name: impl Into<String>,
        country: impl Into<String>,
        purchase_date: NaiveDate,
        amount: Decimal,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            country: country.into(),
            purchase_date,
            amount,
        }
    }
}

/// One row of raw delimited input.
///
/// A `None` field means the column was absent from that row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseRow {
    pub customer_name: Option<String>,
    pub country: Option<String>,
    pub purchase_date: Option<String>,
    pub amount: Option<String>,
}

impl PurchaseRow {
    /// Build a row where every column is present.
    pub fn new(
        customer_name: impl Into<String>,
        country: impl Into<String>,
        purchase_date: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: Some(customer_name.into()),
            country: Some(country.into()),
            purchase_date: Some(purchase_date.into()),
            amount: Some(amount.into()),
        }
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    value
        .map(str::trim)
        .ok_or(ValidationError::MissingField { field })
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
        expected: DATE_FORMAT_HINT,
    })
}

fn parse_amount(value: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(value).map_err(|e| ValidationError::InvalidAmount {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
