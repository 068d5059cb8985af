//! Application services (use cases).
//!
//! These services orchestrate domain logic over the store port to implement
//! the ledger's use cases.

pub mod analytics;
pub mod forecast;
pub mod kpi;
pub mod ledger;
