//! Ledger service.
//!
//! Validates incoming purchases and drives the purchase store. This is the
//! write side of the system plus the filtered read used by listings.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{NewPurchase, Purchase, PurchaseFilter, PurchaseRow};
use crate::error::{Error, Result};
use crate::port::outbound::store::PurchaseStore;

/// Entry point for recording, deleting, and listing purchases.
#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn PurchaseStore>,
}

impl LedgerService {
    /// Create a ledger service over the given store.
    pub fn new(store: Arc<dyn PurchaseStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn PurchaseStore> {
        &self.store
    }

    /// Validate and record one purchase.
    pub fn insert(&self, input: NewPurchase) -> Result<Purchase> {
        let purchase = Purchase::try_from(input)?;
        self.store.append(purchase.clone())?;
        debug!(
            customer = purchase.customer_name(),
            country = purchase.country(),
            date = %purchase.purchase_date(),
            amount = %purchase.amount(),
            "Purchase recorded"
        );
        Ok(purchase)
    }

    /// Parse and record a batch of raw rows.
    ///
    /// Stops at the first row that fails validation and returns
    /// [`Error::InvalidRow`] with its 1-based position. Rows before it are
    /// kept; there is no rollback.
    pub fn bulk_insert<I>(&self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = PurchaseRow>,
    {
        let mut parsed = Vec::new();
        let mut failure = None;

        for (index, row) in rows.into_iter().enumerate() {
            match Purchase::from_row(&row) {
                Ok(purchase) => parsed.push(purchase),
                Err(source) => {
                    failure = Some(Error::InvalidRow {
                        row: index + 1,
                        source,
                    });
                    break;
                }
            }
        }

        let appended = self.store.append_all(parsed)?;

        match failure {
            Some(err) => {
                warn!(kept = appended, error = %err, "Bulk insert aborted");
                Err(err)
            }
            None => {
                info!(added = appended, "Bulk insert complete");
                Ok(appended)
            }
        }
    }

    /// Remove every purchase by `customer_name` (exact match).
    ///
    /// Returns [`Error::NotFound`] if the customer has no purchases.
    pub fn delete_by_customer(&self, customer_name: &str) -> Result<usize> {
        let removed = self.store.remove_customer(customer_name)?;
        if removed == 0 {
            return Err(Error::NotFound {
                customer_name: customer_name.to_string(),
            });
        }
        info!(customer = customer_name, removed, "Customer purchases deleted");
        Ok(removed)
    }

    /// Purchases matching `filter`, newest first.
    ///
    /// Purchases on the same day keep their insertion order.
    pub fn query(&self, filter: &PurchaseFilter) -> Result<Vec<Purchase>> {
        let mut purchases = self.store.find(filter)?;
        purchases.sort_by(|a, b| b.purchase_date().cmp(&a.purchase_date()));
        Ok(purchases)
    }

    /// Number of stored purchases.
    pub fn len(&self) -> Result<usize> {
        self.store.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> Result<bool> {
        self.store.is_empty()
    }
}
