//! Purchase ledger - client purchase records, KPIs, and sales forecasts.
//!
//! This crate keeps customer purchases in a process-lifetime store and
//! derives per-client and per-country indicators from them, plus a
//! short-horizon forecast of daily sales using Holt's linear trend model.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Purchases, query filters, report DTOs, validation errors
//! - **`port`** - Store and clock traits the services depend on
//! - **`application`** - Ledger, KPI aggregation, forecasting, analytics facade
//! - **`adapter`** - CSV reader and CLI (inbound), in-memory store (outbound)
//! - **`infrastructure`** - Configuration, logging, service wiring
//!
//! # Example
//!
//! ```no_run
//! use purchase_ledger::domain::NewPurchase;
//! use purchase_ledger::infrastructure::bootstrap::Services;
//! use purchase_ledger::infrastructure::config::settings::Config;
//! use rust_decimal::Decimal;
//!
//! fn main() -> purchase_ledger::error::Result<()> {
//!     let services = Services::in_memory(&Config::default());
//!     let date = chrono::NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
//!
//!     services
//!         .ledger
//!         .insert(NewPurchase::new("Alice Person", "Canada", date, Decimal::new(25075, 2)))?;
//!
//!     let report = services.analytics.build_report(Some(7))?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
