// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source of "today" for date fallbacks.
//!
//! Issues without a due date end today. The current date is injected through
//! [`Clock`] so that pipeline output is reproducible in tests.

use chrono::{Local, NaiveDate};

/// Trait for getting the current calendar date.
///
/// This allows injecting a fixed clock for testing.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// System clock using the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock> Clock for &C {
    fn today(&self) -> NaiveDate {
        (*self).today()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
