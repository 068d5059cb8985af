//! Sales forecasting over a trailing daily window.
//!
//! The builder turns purchases into a fixed-length series of daily totals
//! ending today, fits a [`holt`] model to it, and labels the projection.
//!
//! The series is ordered newest day first by default. Holt's method reads
//! the series left to right, so on this ordering a rising sales history
//! produces a falling forecast. [`SeriesOrder::OldestFirst`] feeds the days
//! chronologically instead.

pub mod holt;

use std::collections::HashMap;
use std::time::Duration;

use chrono::{NaiveDate, TimeDelta};
use serde::Deserialize;
use tracing::info;

use self::holt::HoltConfig;
use super::kpi::to_f64;
use crate::domain::{Forecast, Purchase};
use crate::error::Result;

/// Order in which the daily window is fed to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrder {
    /// Today first, then yesterday, and so on back through the window.
    #[default]
    NewestFirst,
    /// Oldest day of the window first, today last.
    OldestFirst,
}

/// Forecast configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of trailing days, today included, in the model input.
    pub window_days: u32,
    /// Wall-clock budget for one model fit, in milliseconds.
    pub fit_timeout_ms: u64,
    /// Iteration budget for the parameter search.
    pub max_iterations: usize,
    /// Order of the daily series.
    pub series_order: SeriesOrder,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            fit_timeout_ms: 2_000,
            max_iterations: 500,
            series_order: SeriesOrder::NewestFirst,
        }
    }
}

impl ForecastConfig {
    /// Fit timeout as a [`Duration`].
    #[must_use]
    pub const fn fit_timeout(&self) -> Duration {
        Duration::from_millis(self.fit_timeout_ms)
    }

    fn holt(&self) -> HoltConfig {
        HoltConfig {
            max_iterations: self.max_iterations,
            timeout: self.fit_timeout(),
            ..HoltConfig::default()
        }
    }
}

/// Builds daily sales series and forecasts from them.
#[derive(Debug, Clone, Default)]
pub struct ForecastBuilder {
    config: ForecastConfig,
}

impl ForecastBuilder {
    /// Create a builder with the given configuration.
    pub const fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Return the current configuration.
    #[must_use]
    pub const fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Daily sales totals for the window ending at `today`.
    ///
    /// Each day in the window gets exactly one point; days without
    /// purchases are zero. Purchases outside the window are ignored.
    #[must_use]
    pub fn daily_series(&self, purchases: &[Purchase], today: NaiveDate) -> Vec<f64> {
        let mut totals: HashMap<NaiveDate, f64> = HashMap::new();
        for purchase in purchases {
            *totals.entry(purchase.purchase_date()).or_default() += to_f64(purchase.amount());
        }

        let mut series: Vec<f64> = (0..self.config.window_days)
            .map(|offset| today - TimeDelta::days(i64::from(offset)))
            .map(|day| totals.get(&day).copied().unwrap_or_default())
            .collect();

        if self.config.series_order == SeriesOrder::OldestFirst {
            series.reverse();
        }
        series
    }

    /// Forecast `days` steps past the window ending at `today`.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientData`](crate::error::Error::InsufficientData)
    ///   if the window yields fewer than two points
    /// - [`Error::ModelFit`](crate::error::Error::ModelFit) if the model
    ///   cannot be fitted
    pub fn forecast(&self, purchases: &[Purchase], today: NaiveDate, days: u32) -> Result<Forecast> {
        let series = self.daily_series(purchases, today);
        let model = holt::fit(&series, &self.config.holt())?;
        let values = model.forecast(days as usize);

        info!(
            window_days = self.config.window_days,
            forecast_days = days,
            alpha = model.alpha,
            beta = model.beta,
            "Sales forecast computed"
        );

        Ok(Forecast::from_values(&values))
    }
}
