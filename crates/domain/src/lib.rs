// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod canonical_time;
mod config;
mod error;
mod types;
mod validation;
mod weekday;

#[cfg(test)]
mod tests;

// Re-export public types
pub use canonical_time::{CanonicalTime, SLEEP_MINUTE_GRID, SleepTime, TimeOfDay, WakeTime};
pub use config::{
    DEFAULT_BOOT_TIME_SECONDS, DEFAULT_RTCWAKE_OPTIONS, GawakeConfig, MAX_BOOT_TIME_SECONDS,
    validate_boot_time, validate_rtcwake_options,
};
pub use error::DomainError;
pub use types::{PowerMode, RuleId, RuleKind, ScheduledRule, SleepRule, WakeRule};
pub use validation::{
    MAX_COMMAND_LENGTH, MAX_RULE_NAME_LENGTH, validate_command, validate_insert,
    validate_rule_name, validate_sleep_rule_fields, validate_wake_rule_fields,
};
pub use weekday::{DAYS_IN_WEEK, Weekday, WeekdayMask};
