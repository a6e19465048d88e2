//! Calendar date sources.

use std::fmt::Debug;

use chrono::{NaiveDate, Utc};

/// Source of "today" as a UTC calendar date.
pub trait Clock: Debug + Send + Sync {
    /// Current UTC date, no time component.
    fn today(&self) -> NaiveDate;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
