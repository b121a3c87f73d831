// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical time-of-day strings.
//!
//! Wake rules carry a six digit `HHMMSS` time, sleep rules a four digit
//! `HHMM` time restricted to a 15 minute grid. The zero-padded string is
//! the persisted form; ordering and equality use the integer value.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minutes a sleep rule may be scheduled on.
pub const SLEEP_MINUTE_GRID: [u8; 4] = [0, 15, 30, 45];

/// A fixed-width, zero-padded time-of-day string.
pub trait CanonicalTime {
    /// Returns the zero-padded digit string.
    fn as_str(&self) -> &str;

    /// Returns the integer value of the digit string.
    fn value(&self) -> u32;
}

fn parse_digits(input: &str, width: usize) -> Result<Vec<u8>, DomainError> {
    if input.len() != width || !input.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(DomainError::InvalidTimeFormat(format!(
            "'{input}' must be exactly {width} digits"
        )));
    }

    // Two-digit fields: HH, MM and optionally SS.
    Ok(input
        .as_bytes()
        .chunks(2)
        .map(|pair| (pair[0] - b'0') * 10 + (pair[1] - b'0'))
        .collect())
}

fn check_range(input: &str, label: &str, value: u8, max: u8) -> Result<(), DomainError> {
    if value > max {
        return Err(DomainError::InvalidTimeFormat(format!(
            "'{input}': {label} must be between 00 and {max:02}, got {value:02}"
        )));
    }
    Ok(())
}

/// Second-precision wake time, `HHMMSS` in `000000..=235959`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime {
    digits: String,
    value: u32,
}

impl WakeTime {
    /// Parses a six digit `HHMMSS` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if the string is not six
    /// digits or a field is out of range.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let fields: Vec<u8> = parse_digits(input, 6)?;
        Self::from_hms(fields[0], fields[1], fields[2])
    }

    /// Builds a wake time from its fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if a field is out of range.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, DomainError> {
        let digits: String = format!("{hour:02}{minute:02}{second:02}");
        check_range(&digits, "hour", hour, 23)?;
        check_range(&digits, "minutes", minute, 59)?;
        check_range(&digits, "seconds", second, 59)?;

        let value: u32 =
            u32::from(hour) * 10_000 + u32::from(minute) * 100 + u32::from(second);
        Ok(Self { digits, value })
    }

    /// Returns the hour field.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hour(&self) -> u8 {
        (self.value / 10_000) as u8
    }

    /// Returns the minute field.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn minute(&self) -> u8 {
        ((self.value / 100) % 100) as u8
    }

    /// Returns the second field.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn second(&self) -> u8 {
        (self.value % 100) as u8
    }

    /// Seconds elapsed since midnight.
    #[must_use]
    pub fn seconds_since_midnight(&self) -> u32 {
        u32::from(self.hour()) * 3600 + u32::from(self.minute()) * 60 + u32::from(self.second())
    }

    /// Converts to a `time::Time`.
    ///
    /// # Errors
    ///
    /// Never fails for a value produced by `parse`/`from_hms`, but the
    /// conversion is checked rather than assumed.
    pub fn to_time(&self) -> Result<time::Time, DomainError> {
        time::Time::from_hms(self.hour(), self.minute(), self.second())
            .map_err(|e| DomainError::InvalidTimeFormat(format!("'{}': {e}", self.digits)))
    }
}

impl CanonicalTime for WakeTime {
    fn as_str(&self) -> &str {
        &self.digits
    }

    fn value(&self) -> u32 {
        self.value
    }
}

impl TryFrom<String> for WakeTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WakeTime> for String {
    fn from(value: WakeTime) -> Self {
        value.digits
    }
}

impl std::fmt::Display for WakeTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Minute-precision sleep time, `HHMM` with minutes on the 15 minute grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SleepTime {
    digits: String,
    value: u32,
}

impl SleepTime {
    /// Parses a four digit `HHMM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if the string is not four
    /// digits, the hour is out of range, or the minutes are off the grid.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let fields: Vec<u8> = parse_digits(input, 4)?;
        Self::from_hm(fields[0], fields[1])
    }

    /// Builds a sleep time from its fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if the hour is out of range
    /// or the minutes are not one of 00, 15, 30 or 45.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        let digits: String = format!("{hour:02}{minute:02}");
        check_range(&digits, "hour", hour, 23)?;
        if !SLEEP_MINUTE_GRID.contains(&minute) {
            return Err(DomainError::InvalidTimeFormat(format!(
                "'{digits}': minutes must be 00, 15, 30 or 45, got {minute:02}"
            )));
        }

        let value: u32 = u32::from(hour) * 100 + u32::from(minute);
        Ok(Self { digits, value })
    }

    /// Returns the hour field.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hour(&self) -> u8 {
        (self.value / 100) as u8
    }

    /// Returns the minute field.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn minute(&self) -> u8 {
        (self.value % 100) as u8
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub const fn minutes_since_midnight(&self) -> u32 {
        (self.value / 100) * 60 + self.value % 100
    }
}

impl CanonicalTime for SleepTime {
    fn as_str(&self) -> &str {
        &self.digits
    }

    fn value(&self) -> u32 {
        self.value
    }
}

impl TryFrom<String> for SleepTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SleepTime> for String {
    fn from(value: SleepTime) -> Self {
        value.digits
    }
}

impl std::fmt::Display for SleepTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// The current wall-clock time of day, as read from a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Creates a time of day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if a field is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, DomainError> {
        let digits: String = format!("{hour:02}{minute:02}{second:02}");
        check_range(&digits, "hour", hour, 23)?;
        check_range(&digits, "minutes", minute, 59)?;
        check_range(&digits, "seconds", second, 59)?;
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour field.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute field.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second field.
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Numeric `HHMMSS` value, comparable with `WakeTime::value`.
    #[must_use]
    pub fn hhmmss(&self) -> u32 {
        u32::from(self.hour) * 10_000 + u32::from(self.minute) * 100 + u32::from(self.second)
    }

    /// Minutes elapsed since midnight, ignoring seconds.
    #[must_use]
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Seconds elapsed since midnight.
    #[must_use]
    pub fn seconds_since_midnight(&self) -> u32 {
        self.minutes_since_midnight() * 60 + u32::from(self.second)
    }
}

impl From<time::Time> for TimeOfDay {
    fn from(value: time::Time) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
