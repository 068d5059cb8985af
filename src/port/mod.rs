//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the ledger's application services and the
//! infrastructure they run on.
//!
//! ```text
//!                ┌─────────────────────────┐
//!                │      Application        │
//!                │  ledger · kpi · forecast│
//!                └───────────┬─────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!        ┌───────────┐               ┌───────────┐
//!        │   Store   │               │   Clock   │
//!        │  Adapter  │               │  Adapter  │
//!        └───────────┘               └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::store::PurchaseStore`] - Process-lifetime purchase storage
//! - [`outbound::clock::Clock`] - Source of "today" for forecast windows

pub mod outbound;
