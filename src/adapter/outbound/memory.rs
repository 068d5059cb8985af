//! In-memory purchase store.

use parking_lot::RwLock;

use crate::domain::{Purchase, PurchaseFilter};
use crate::error::Result;
use crate::port::outbound::store::PurchaseStore;

/// Process-lifetime purchase store backed by a locked `Vec`.
///
/// Writers take the write lock for the whole mutation, readers copy out
/// under the read lock.
#[derive(Debug, Default)]
pub struct MemoryPurchaseStore {
    purchases: RwLock<Vec<Purchase>>,
}

impl MemoryPurchaseStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PurchaseStore for MemoryPurchaseStore {
    fn append(&self, purchase: Purchase) -> Result<()> {
        self.purchases.write().push(purchase);
        Ok(())
    }

    fn append_all(&self, purchases: Vec<Purchase>) -> Result<usize> {
        let count = purchases.len();
        self.purchases.write().extend(purchases);
        Ok(count)
    }

    fn remove_customer(&self, customer_name: &str) -> Result<usize> {
        let mut purchases = self.purchases.write();
        let before = purchases.len();
        purchases.retain(|p| p.customer_name() != customer_name);
        Ok(before - purchases.len())
    }

    fn find(&self, filter: &PurchaseFilter) -> Result<Vec<Purchase>> {
        let purchases = self.purchases.read();
        Ok(purchases
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<Purchase>> {
        Ok(self.purchases.read().clone())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.purchases.read().len())
    }
}
