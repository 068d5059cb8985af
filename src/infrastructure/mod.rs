//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring the store into the services
//! - [`config`] - Configuration loading, validation, and logging setup

pub mod bootstrap;
pub mod config;
