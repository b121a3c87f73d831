// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::weekday::Weekday;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A rule with the same canonical time is already active on a weekday
    /// the candidate also covers.
    DuplicateScheduleConflict {
        /// The first weekday on which the collision was found.
        weekday: Weekday,
        /// The canonical time shared by both rules.
        time: String,
    },
    /// A canonical time string is malformed or out of range.
    InvalidTimeFormat(String),
    /// A weekday mask is malformed.
    InvalidWeekdayMask(String),
    /// Rule name is empty or too long.
    InvalidRuleName(String),
    /// Pre-command is too long.
    InvalidCommand(String),
    /// Power mode is not one of the recognised tags.
    InvalidPowerMode(String),
    /// A rule kind string is not recognised.
    InvalidRuleKind(String),
    /// The rtcwake option string contains flags managed by Gawake.
    InvalidRtcwakeOptions(String),
    /// The boot tolerance is out of range.
    InvalidBootTime(String),
    /// A manual timestamp is not a valid `YYYYMMDDhhmmss` value.
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateScheduleConflict { weekday, time } => {
                write!(
                    f,
                    "There is already a rule on {weekday} at {time}; choose another time or day"
                )
            }
            Self::InvalidTimeFormat(msg) => write!(f, "Invalid time format: {msg}"),
            Self::InvalidWeekdayMask(msg) => write!(f, "Invalid weekday mask: {msg}"),
            Self::InvalidRuleName(msg) => write!(f, "Invalid rule name: {msg}"),
            Self::InvalidCommand(msg) => write!(f, "Invalid command: {msg}"),
            Self::InvalidPowerMode(mode) => write!(f, "Invalid power mode: '{mode}'"),
            Self::InvalidRuleKind(kind) => {
                write!(f, "Invalid rule kind: '{kind}'. Expected 'wake' or 'sleep'")
            }
            Self::InvalidRtcwakeOptions(msg) => write!(f, "Invalid rtcwake options: {msg}"),
            Self::InvalidBootTime(msg) => write!(f, "Invalid boot time: {msg}"),
            Self::InvalidTimestamp { input, reason } => {
                write!(f, "Invalid timestamp '{input}': {reason}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
