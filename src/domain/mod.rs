//! Ledger domain types.
//!
//! - [`purchase`] - The purchase record and its validated constructors
//! - [`filter`] - Query predicates over purchases
//! - [`report`] - KPI and forecast report shapes
//! - [`error`] - Validation errors raised while building records

pub mod error;
pub mod filter;
pub mod purchase;
pub mod report;

pub use error::ValidationError;
pub use filter::PurchaseFilter;
pub use purchase::{NewPurchase, Purchase, PurchaseRow, DATE_FORMAT};
pub use report::{Forecast, ForecastPoint, Report, SalesForecast};
