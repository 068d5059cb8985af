//! Analytics report types.
//!
//! DTOs produced by the analytics facade and rendered by the CLI.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Marker rendered in place of a forecast that was not asked for.
pub const NOT_REQUESTED: &str = "Not requested";

/// One forecast step.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    /// Ordinal label, `"Day 1"` for the first step.
    pub label: String,
    /// Projected sales, rounded to 2 decimals.
    pub value: f64,
}

/// A computed sales forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Label and round raw model output.
    pub fn from_values(values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, value)| ForecastPoint {
                label: format!("Day {}", i + 1),
                value: round_cents(*value),
            })
            .collect();
        Self { points }
    }

    /// Forecast steps in order.
    #[must_use]
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of forecast steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the forecast has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Serialize for Forecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.points.len()))?;
        for point in &self.points {
            map.serialize_entry(&point.label, &point.value)?;
        }
        map.end()
    }
}

/// Forecast section of a report.
///
/// Distinguishes "no forecast computed" from a computed forecast.
#[derive(Debug, Clone, PartialEq)]
pub enum SalesForecast {
    /// The caller did not ask for a forecast.
    NotRequested,
    /// A forecast was computed.
    Computed(Forecast),
}

impl SalesForecast {
    /// The computed forecast, if any.
    #[must_use]
    pub const fn as_computed(&self) -> Option<&Forecast> {
        match self {
            Self::NotRequested => None,
            Self::Computed(forecast) => Some(forecast),
        }
    }
}

impl Serialize for SalesForecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotRequested => serializer.serialize_str(NOT_REQUESTED),
            Self::Computed(forecast) => forecast.serialize(serializer),
        }
    }
}

/// Full analytics report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Mean purchase amount per customer.
    pub mean_purchases_per_client: BTreeMap<String, f64>,
    /// Distinct customers per country.
    pub clients_per_country: BTreeMap<String, usize>,
    /// Sales forecast, or the not-requested marker.
    pub sales_forecast: SalesForecast,
}

/// Round to 2 decimal places.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
