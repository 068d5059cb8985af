//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] - A [`Clock`](crate::port::outbound::clock::Clock) pinned to one date.
//! - [`domain`] - Builders for purchases, rows, and CSV text.

pub mod clock;
pub mod domain;
