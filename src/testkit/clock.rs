//! Deterministic clock.

use chrono::NaiveDate;

use crate::port::outbound::clock::Clock;

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Pin the clock to `today`.
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
