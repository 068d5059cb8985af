use std::sync::Arc;

use chrono::NaiveDate;
use purchase_ledger::adapter::outbound::memory::MemoryPurchaseStore;
use purchase_ledger::infrastructure::bootstrap::Services;
use purchase_ledger::infrastructure::config::settings::Config;
use purchase_ledger::testkit::clock::FixedClock;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Services over an empty store with the clock pinned to [`today`].
pub fn services() -> Services {
    services_with(&Config::default())
}

pub fn services_with(config: &Config) -> Services {
    Services::with(
        config,
        Arc::new(MemoryPurchaseStore::new()),
        Arc::new(FixedClock::new(today())),
    )
}
