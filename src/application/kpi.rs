//! KPI aggregation over purchase records.
//!
//! Both aggregations refuse to run on an empty record set and return
//! [`Error::NoData`] instead of an empty map. Amounts are summed as `f64`,
//! so totals past the `Decimal` range degrade in precision instead of
//! overflowing.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::Purchase;
use crate::error::{Error, Result};

/// Mean purchase amount per customer, keyed by exact customer name.
pub fn mean_amount_per_client(purchases: &[Purchase]) -> Result<BTreeMap<String, f64>> {
    if purchases.is_empty() {
        return Err(Error::NoData);
    }

    let mut totals: BTreeMap<&str, (f64, u32)> = BTreeMap::new();
    for purchase in purchases {
        let entry = totals.entry(purchase.customer_name()).or_insert((0.0, 0));
        entry.0 += to_f64(purchase.amount());
        entry.1 += 1;
    }

    Ok(totals
        .into_iter()
        .map(|(name, (sum, count))| (name.to_string(), sum / f64::from(count)))
        .collect())
}

/// Number of distinct customers per country.
///
/// Countries are grouped ignoring case; each group is reported under the
/// spelling of the first purchase seen for it.
pub fn distinct_client_count_per_country(
    purchases: &[Purchase],
) -> Result<BTreeMap<String, usize>> {
    if purchases.is_empty() {
        return Err(Error::NoData);
    }

    let mut groups: HashMap<String, (&str, HashSet<&str>)> = HashMap::new();
    for purchase in purchases {
        let (_, clients) = groups
            .entry(purchase.country().to_lowercase())
            .or_insert_with(|| (purchase.country(), HashSet::new()));
        clients.insert(purchase.customer_name());
    }

    Ok(groups
        .into_values()
        .map(|(country, clients)| (country.to_string(), clients.len()))
        .collect())
}

/// Convert a ledger amount to `f64` for reporting and modeling.
pub(crate) fn to_f64(value: Decimal) -> f64 {
    // Every Decimal is within f64 range; NaN only if that ever changes.
    value.to_f64().unwrap_or(f64::NAN)
}
