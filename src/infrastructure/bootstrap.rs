//! Composition root: wires one store into the services that share it.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::memory::MemoryPurchaseStore;
use crate::application::analytics::AnalyticsService;
use crate::application::forecast::ForecastBuilder;
use crate::application::ledger::LedgerService;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::clock::{Clock, SystemClock};
use crate::port::outbound::store::PurchaseStore;

/// Services sharing a single purchase store.
#[derive(Clone)]
pub struct Services {
    pub ledger: LedgerService,
    pub analytics: AnalyticsService,
}

impl Services {
    /// Build services over a fresh in-memory store and the system clock.
    pub fn in_memory(config: &Config) -> Self {
        Self::with(
            config,
            Arc::new(MemoryPurchaseStore::new()),
            Arc::new(SystemClock),
        )
    }

    /// Build services over an explicit store and clock.
    pub fn with(config: &Config, store: Arc<dyn PurchaseStore>, clock: Arc<dyn Clock>) -> Self {
        debug!(
            window_days = config.forecast.window_days,
            series_order = ?config.forecast.series_order,
            "Wiring ledger services"
        );
        let forecaster = ForecastBuilder::new(config.forecast.clone());
        Self {
            ledger: LedgerService::new(Arc::clone(&store)),
            analytics: AnalyticsService::new(store, clock, forecaster),
        }
    }
}
