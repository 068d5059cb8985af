//! Builders for ledger primitives used across tests.
//!
//! Provides concise factory functions for [`Purchase`], [`PurchaseRow`],
//! and CSV text so tests focus on assertions rather than construction
//! boilerplate.

use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;

use crate::domain::{Purchase, PurchaseRow};

/// Header line accepted by the CSV reader.
pub const CSV_HEADER: &str = "customer_name,country,purchase_date,amount";

/// Build a purchase on a specific date.
///
/// # Panics
///
/// Panics if `name` or `country` is blank.
pub fn purchase_on(name: &str, country: &str, date: NaiveDate, amount: Decimal) -> Purchase {
    Purchase::try_new(name, country, date, amount).expect("valid test purchase")
}

/// Build a purchase `days_ago` days before `today`.
pub fn purchase_days_ago(
    name: &str,
    country: &str,
    today: NaiveDate,
    days_ago: i64,
    amount: Decimal,
) -> Purchase {
    purchase_on(name, country, today - TimeDelta::days(days_ago), amount)
}

/// Build a fully populated raw row.
pub fn row(name: &str, country: &str, date: &str, amount: &str) -> PurchaseRow {
    PurchaseRow::new(name, country, date, amount)
}

/// Render rows as CSV text with the standard header.
pub fn csv(lines: &[&str]) -> String {
    let mut text = String::from(CSV_HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text
}
