// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Utc};
use gawake::Clock;
use gawake_domain::{DomainError, TimeOfDay, Weekday};
use time::{Date, Month, PrimitiveDateTime, Time};

/// The wall clock, read once when constructed.
///
/// Every reading describes that same instant, so a tick that straddles a
/// minute boundary stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    instant: PrimitiveDateTime,
}

impl SystemClock {
    /// Reads the current time in local time or UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the system time cannot be represented.
    pub fn now(use_localtime: bool) -> Result<Self, DomainError> {
        let now: NaiveDateTime = if use_localtime {
            Local::now().naive_local()
        } else {
            Utc::now().naive_utc()
        };
        Self::from_naive(now)
    }

    /// Converts a `chrono` timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if a field is out of range.
    pub fn from_naive(now: NaiveDateTime) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidTimestamp {
            input: now.to_string(),
            reason,
        };
        let narrow = |value: u32| u8::try_from(value).map_err(|e| invalid(e.to_string()));

        let month: Month = Month::try_from(narrow(now.month())?).map_err(|e| invalid(e.to_string()))?;
        let date: Date = Date::from_calendar_date(now.year(), month, narrow(now.day())?)
            .map_err(|e| invalid(e.to_string()))?;
        let time: Time = Time::from_hms(
            narrow(now.hour())?,
            narrow(now.minute())?,
            narrow(now.second())?,
        )
        .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            instant: PrimitiveDateTime::new(date, time),
        })
    }
}

impl Clock for SystemClock {
    fn current_weekday(&self) -> Weekday {
        Weekday::from(self.instant.weekday())
    }

    fn current_time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from(self.instant.time())
    }

    fn current_date(&self) -> Date {
        self.instant.date()
    }
}
