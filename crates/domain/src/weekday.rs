// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekday lookup table and weekday masks.
//!
//! Weekdays are indexed `0 = Sunday … 6 = Saturday`, matching the column
//! order of the rule tables. All index arithmetic wraps with `mod 7`.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of days in the weekly cycle.
pub const DAYS_IN_WEEK: usize = 7;

/// Column abbreviation and display name, indexed by weekday number.
const DAY_TABLE: [(&str, &str); DAYS_IN_WEEK] = [
    ("sun", "Sunday"),
    ("mon", "Monday"),
    ("tue", "Tuesday"),
    ("wed", "Wednesday"),
    ("thu", "Thursday"),
    ("fri", "Friday"),
    ("sat", "Saturday"),
];

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in index order.
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday number (`0 = Sunday`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the weekday for an index, wrapping with `mod 7`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_IN_WEEK]
    }

    /// Returns the weekday `days` after this one.
    #[must_use]
    pub const fn offset(self, days: usize) -> Self {
        Self::from_index(self.index() + days)
    }

    /// Returns the three-letter lowercase abbreviation (`"sun"` … `"sat"`).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        DAY_TABLE[self.index()].0
    }

    /// Returns the English display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        DAY_TABLE[self.index()].1
    }

    /// Looks up a weekday by abbreviation or full name, case-insensitively.
    #[must_use]
    pub fn from_abbreviation(value: &str) -> Option<Self> {
        let lowered: String = value.trim().to_lowercase();
        DAY_TABLE
            .iter()
            .position(|(abbr, name)| *abbr == lowered || name.to_lowercase() == lowered)
            .map(Self::from_index)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<time::Weekday> for Weekday {
    fn from(value: time::Weekday) -> Self {
        Self::from_index(usize::from(value.number_days_from_sunday()))
    }
}

/// The set of weekdays a rule is active on.
///
/// Text form is seven `0`/`1` characters from Sunday to Saturday
/// (`"0111110"` is Monday–Friday). Parsing also accepts a comma separated
/// list of day names (`"mon,wed,fri"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WeekdayMask {
    days: [bool; DAYS_IN_WEEK],
}

impl WeekdayMask {
    /// Creates a mask from seven booleans, Sunday first.
    #[must_use]
    pub const fn new(days: [bool; DAYS_IN_WEEK]) -> Self {
        Self { days }
    }

    /// Creates a mask with no active days.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            days: [false; DAYS_IN_WEEK],
        }
    }

    /// Creates a mask with every day active.
    #[must_use]
    pub const fn every_day() -> Self {
        Self {
            days: [true; DAYS_IN_WEEK],
        }
    }

    /// Creates a mask from a list of weekdays.
    #[must_use]
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().fold(Self::empty(), |mask, day| mask.with(*day))
    }

    /// Returns a copy of this mask with `day` active.
    #[must_use]
    pub const fn with(mut self, day: Weekday) -> Self {
        self.days[day.index()] = true;
        self
    }

    /// Returns whether the rule fires on `day`.
    #[must_use]
    pub const fn is_active(&self, day: Weekday) -> bool {
        self.days[day.index()]
    }

    /// Returns whether no day is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.days.iter().any(|active| *active)
    }

    /// Iterates the active weekdays in index order.
    pub fn active_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL
            .into_iter()
            .filter(move |day| self.is_active(*day))
    }

    /// Returns the raw booleans, Sunday first.
    #[must_use]
    pub const fn as_array(&self) -> [bool; DAYS_IN_WEEK] {
        self.days
    }

    fn parse_bits(value: &str) -> Result<Self, DomainError> {
        let mut days: [bool; DAYS_IN_WEEK] = [false; DAYS_IN_WEEK];
        for (index, ch) in value.chars().enumerate() {
            days[index] = match ch {
                '1' => true,
                '0' => false,
                other => {
                    return Err(DomainError::InvalidWeekdayMask(format!(
                        "'{value}' contains '{other}'; use only 0 and 1"
                    )));
                }
            };
        }
        Ok(Self { days })
    }

    fn parse_names(value: &str) -> Result<Self, DomainError> {
        let mut mask: Self = Self::empty();
        for part in value.split(',') {
            let day: Weekday = Weekday::from_abbreviation(part).ok_or_else(|| {
                DomainError::InvalidWeekdayMask(format!("'{}' is not a weekday", part.trim()))
            })?;
            mask = mask.with(day);
        }
        Ok(mask)
    }
}

impl FromStr for WeekdayMask {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: &str = s.trim();
        if value.is_empty() {
            return Err(DomainError::InvalidWeekdayMask(String::from(
                "Weekday mask cannot be empty",
            )));
        }

        if value.chars().all(|ch| ch.is_ascii_digit()) {
            if value.len() != DAYS_IN_WEEK {
                return Err(DomainError::InvalidWeekdayMask(format!(
                    "'{value}' must have exactly {DAYS_IN_WEEK} digits, Sunday to Saturday"
                )));
            }
            return Self::parse_bits(value);
        }

        Self::parse_names(value)
    }
}

impl std::fmt::Display for WeekdayMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for active in self.days {
            write!(f, "{}", if active { '1' } else { '0' })?;
        }
        Ok(())
    }
}
