//! Storage port for purchase records.

use crate::domain::{Purchase, PurchaseFilter};
use crate::error::Result;

/// Storage operations for purchases.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Writers must serialize against each other and readers must never
///   observe a write half-applied
/// - Results come back in insertion order; ordering for display is the
///   caller's job
pub trait PurchaseStore: Send + Sync {
    /// Append one purchase.
    fn append(&self, purchase: Purchase) -> Result<()>;

    /// Append a batch as a single write. Returns the number appended.
    fn append_all(&self, purchases: Vec<Purchase>) -> Result<usize>;

    /// Remove every purchase whose customer name equals `customer_name`
    /// exactly. Returns the number removed.
    fn remove_customer(&self, customer_name: &str) -> Result<usize>;

    /// Purchases matching `filter`, in insertion order.
    fn find(&self, filter: &PurchaseFilter) -> Result<Vec<Purchase>>;

    /// Copy of every stored purchase, in insertion order.
    fn all(&self) -> Result<Vec<Purchase>>;

    /// Number of stored purchases.
    fn len(&self) -> Result<usize>;

    /// True if nothing is stored.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
