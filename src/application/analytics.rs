//! Analytics facade.
//!
//! Combines KPI aggregation and sales forecasting into a single
//! [`Report`]. This is the only read-side entry point the presentation layer
//! needs.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::forecast::ForecastBuilder;
use super::kpi;
use crate::domain::{Purchase, Report, SalesForecast};
use crate::error::Result;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::store::PurchaseStore;

/// Builds analytics reports over the whole purchase store.
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn PurchaseStore>,
    clock: Arc<dyn Clock>,
    forecaster: ForecastBuilder,
}

impl AnalyticsService {
    /// Create an analytics service.
    pub fn new(
        store: Arc<dyn PurchaseStore>,
        clock: Arc<dyn Clock>,
        forecaster: ForecastBuilder,
    ) -> Self {
        Self {
            store,
            clock,
            forecaster,
        }
    }

    /// Build a report over every stored purchase.
    ///
    /// `forecast_days` of `None` or `Some(0)` leaves the forecast as
    /// [`SalesForecast::NotRequested`].
    ///
    /// # Errors
    ///
    /// - [`Error::NoData`](crate::error::Error::NoData) if the store is empty,
    ///   whether or not a forecast was requested
    /// - forecast errors from [`ForecastBuilder::forecast`]
    pub fn build_report(&self, forecast_days: Option<u32>) -> Result<Report> {
        let purchases = self.store.all()?;
        let report = build_report(
            &self.forecaster,
            &purchases,
            self.clock.today(),
            forecast_days,
        )?;

        info!(
            purchases = purchases.len(),
            clients = report.mean_purchases_per_client.len(),
            countries = report.clients_per_country.len(),
            forecast_days = forecast_days.unwrap_or(0),
            "Report built"
        );
        Ok(report)
    }
}

/// Build a report over an explicit record set.
pub fn build_report(
    forecaster: &ForecastBuilder,
    purchases: &[Purchase],
    today: NaiveDate,
    forecast_days: Option<u32>,
) -> Result<Report> {
    let mean_purchases_per_client = kpi::mean_amount_per_client(purchases)?;
    let clients_per_country = kpi::distinct_client_count_per_country(purchases)?;

    let sales_forecast = match forecast_days {
        Some(days) if days > 0 => {
            SalesForecast::Computed(forecaster.forecast(purchases, today, days)?)
        }
        _ => SalesForecast::NotRequested,
    };

    Ok(Report {
        mean_purchases_per_client,
        clients_per_country,
        sales_forecast,
    })
}
