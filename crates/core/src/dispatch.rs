// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Builds the `rtcwake` invocation for a resolved wake rule.
//!
//! Nothing here performs I/O; the caller hands the descriptor to a process
//! runner.

use crate::clock::add_days;
use crate::error::CoreError;
use gawake_domain::{DomainError, PowerMode, ScheduledRule, WakeRule};
use std::ops::Range;
use std::str::FromStr;
use time::{Date, Month, PrimitiveDateTime, Time};

/// Width of an `YYYYMMDDhhmmss` timestamp.
pub const TIMESTAMP_LENGTH: usize = 14;

/// Everything needed to arm the wake timer and suspend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationDescriptor {
    timestamp: PrimitiveDateTime,
    mode: PowerMode,
    pre_command: Option<String>,
    options: String,
}

impl InvocationDescriptor {
    /// Returns the wake instant.
    #[must_use]
    pub const fn timestamp(&self) -> PrimitiveDateTime {
        self.timestamp
    }

    /// Returns the wake instant as `YYYYMMDDhhmmss`.
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        let date: Date = self.timestamp.date();
        let time: Time = self.timestamp.time();
        format!(
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            date.year(),
            u8::from(date.month()),
            date.day(),
            time.hour(),
            time.minute(),
            time.second()
        )
    }

    /// Returns the power mode.
    #[must_use]
    pub const fn mode(&self) -> PowerMode {
        self.mode
    }

    /// Returns the command to run before arming, if any.
    #[must_use]
    pub fn pre_command(&self) -> Option<&str> {
        self.pre_command.as_deref().filter(|cmd| !cmd.is_empty())
    }

    /// Returns the pass-through `rtcwake` options.
    #[must_use]
    pub fn options(&self) -> &str {
        &self.options
    }

    /// Returns this descriptor with the pre-command removed.
    #[must_use]
    pub fn without_pre_command(mut self) -> Self {
        self.pre_command = None;
        self
    }

    /// Renders the `rtcwake` argument vector:
    /// `--date <timestamp> <options...> -m <mode>`.
    #[must_use]
    pub fn rtcwake_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![String::from("--date"), self.timestamp_text()];
        args.extend(self.options.split_whitespace().map(String::from));
        args.push(String::from("-m"));
        args.push(self.mode.as_str().to_string());
        args
    }
}

impl std::fmt::Display for InvocationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rtcwake {}", self.rtcwake_args().join(" "))
    }
}

/// Builds the descriptor for a wake rule firing `days_ahead` days from
/// `now_date`.
///
/// The date arithmetic is calendar aware, so month and year boundaries
/// roll over.
///
/// # Arguments
///
/// * `days_ahead` - Whole days from `now_date`, as returned by the resolver
/// * `rule` - The wake rule that fires
/// * `now_date` - Today's date
/// * `options` - Pass-through `rtcwake` options
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the wake date is out of
/// range.
pub fn build_invocation(
    days_ahead: u8,
    rule: &WakeRule,
    now_date: Date,
    options: &str,
) -> Result<InvocationDescriptor, CoreError> {
    let wake_date: Date = add_days(now_date, u32::from(days_ahead))?;
    build_invocation_on(wake_date, rule, options)
}

/// Builds the descriptor for a wake rule firing on `wake_date`.
///
/// Callers that already hold the wake date (for example from
/// [`Clock::add_days`](crate::Clock::add_days)) use this directly.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeFormat` if the rule time cannot be
/// converted.
pub fn build_invocation_on(
    wake_date: Date,
    rule: &WakeRule,
    options: &str,
) -> Result<InvocationDescriptor, CoreError> {
    let wake_time: Time = rule.time().to_time()?;

    Ok(InvocationDescriptor {
        timestamp: PrimitiveDateTime::new(wake_date, wake_time),
        mode: rule.mode(),
        pre_command: rule.command().map(String::from),
        options: options.to_string(),
    })
}

fn timestamp_field<T: FromStr>(input: &str, range: Range<usize>) -> Result<T, DomainError> {
    input
        .get(range)
        .and_then(|digits| digits.parse::<T>().ok())
        .ok_or_else(|| DomainError::InvalidTimestamp {
            input: input.to_string(),
            reason: String::from("malformed digits"),
        })
}

/// Parses a `YYYYMMDDhhmmss` timestamp.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the text is not exactly 14
/// digits or does not name a real calendar date and time.
pub fn parse_timestamp(input: &str) -> Result<PrimitiveDateTime, DomainError> {
    if input.len() != TIMESTAMP_LENGTH || !input.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(DomainError::InvalidTimestamp {
            input: input.to_string(),
            reason: format!("expected exactly {TIMESTAMP_LENGTH} digits (YYYYMMDDhhmmss)"),
        });
    }

    let invalid = |e: &dyn std::fmt::Display| DomainError::InvalidTimestamp {
        input: input.to_string(),
        reason: e.to_string(),
    };

    let year: i32 = timestamp_field(input, 0..4)?;
    let month: u8 = timestamp_field(input, 4..6)?;
    let day: u8 = timestamp_field(input, 6..8)?;
    let hour: u8 = timestamp_field(input, 8..10)?;
    let minute: u8 = timestamp_field(input, 10..12)?;
    let second: u8 = timestamp_field(input, 12..14)?;

    let month: Month = Month::try_from(month).map_err(|e| invalid(&e))?;
    let date: Date = Date::from_calendar_date(year, month, day).map_err(|e| invalid(&e))?;
    let time: Time = Time::from_hms(hour, minute, second).map_err(|e| invalid(&e))?;

    Ok(PrimitiveDateTime::new(date, time))
}

/// Builds a descriptor for an explicit wake moment, bypassing the rules.
///
/// Manual schedules carry no pre-command.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if `timestamp_text` is invalid.
pub fn build_manual_invocation(
    timestamp_text: &str,
    mode: PowerMode,
    options: &str,
) -> Result<InvocationDescriptor, CoreError> {
    let timestamp: PrimitiveDateTime = parse_timestamp(timestamp_text.trim())?;

    Ok(InvocationDescriptor {
        timestamp,
        mode,
        pre_command: None,
        options: options.to_string(),
    })
}
