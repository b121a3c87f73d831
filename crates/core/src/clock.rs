// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gawake_domain::{DomainError, TimeOfDay, Weekday};
use time::{Date, PrimitiveDateTime};

/// Adds whole days to a calendar date, crossing month and year boundaries.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result is outside
/// the supported date range.
pub fn add_days(date: Date, days: u32) -> Result<Date, DomainError> {
    date.checked_add(time::Duration::days(i64::from(days)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {days} days to {date}"),
        })
}

/// Source of the current weekday, time of day and date.
///
/// All three readings must describe the same instant.
pub trait Clock {
    /// Returns today's weekday.
    fn current_weekday(&self) -> Weekday;

    /// Returns the current time of day.
    fn current_time_of_day(&self) -> TimeOfDay;

    /// Returns today's date.
    fn current_date(&self) -> Date;

    /// Adds whole days to a date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` on overflow.
    fn add_days(&self, date: Date, days: u32) -> Result<Date, DomainError> {
        add_days(date, days)
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: PrimitiveDateTime,
}

impl FixedClock {
    /// Creates a clock that always reads `now`.
    #[must_use]
    pub const fn new(now: PrimitiveDateTime) -> Self {
        Self { now }
    }

    /// Moves the clock to `now`.
    pub const fn set(&mut self, now: PrimitiveDateTime) {
        self.now = now;
    }
}

impl Clock for FixedClock {
    fn current_weekday(&self) -> Weekday {
        Weekday::from(self.now.weekday())
    }

    fn current_time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from(self.now.time())
    }

    fn current_date(&self) -> Date {
        self.now.date()
    }
}
