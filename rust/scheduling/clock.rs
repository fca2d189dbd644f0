//! Sources of "today" for date computations.

use chrono::prelude::*;

/// Provides the current calendar date.
pub trait Clock {
    /// Return today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
