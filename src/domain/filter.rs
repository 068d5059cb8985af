//! Query predicates over purchases.

use chrono::NaiveDate;
use serde::Deserialize;

use super::purchase::Purchase;

/// Conjunction of optional constraints on a purchase query.
///
/// An absent constraint places no restriction on that dimension, so the
/// default filter matches every purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PurchaseFilter {
    /// Country, compared case-insensitively.
    pub country: Option<String>,
    /// Inclusive lower bound on the purchase date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the purchase date.
    pub end_date: Option<NaiveDate>,
}

impl PurchaseFilter {
    /// Filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict to purchases on or after `date`.
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Restrict to purchases on or before `date`.
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// True if no constraint is set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.country.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Check a purchase against every constraint.
    #[must_use]
    pub fn matches(&self, purchase: &Purchase) -> bool {
        // An empty country string is treated as "no filter".
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            if !purchase.is_in_country(country) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if purchase.purchase_date() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if purchase.purchase_date() > end {
                return false;
            }
        }
        true
    }
}
