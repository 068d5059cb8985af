//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: CSV reader and the command-line shell
//! - [`outbound`] - Driven side: the in-memory purchase store

pub mod inbound;
pub mod outbound;
