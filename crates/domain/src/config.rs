// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::PowerMode;
use serde::{Deserialize, Serialize};

/// Default pass-through options for `rtcwake`.
pub const DEFAULT_RTCWAKE_OPTIONS: &str = "-a";

/// Default tolerance after a wake rule's time during which its command
/// still runs on boot.
pub const DEFAULT_BOOT_TIME_SECONDS: u16 = 300;

/// Largest accepted boot tolerance.
pub const MAX_BOOT_TIME_SECONDS: u16 = 3600;

/// Flags Gawake passes itself and that must not appear in the options.
const RESERVED_RTCWAKE_FLAGS: [&str; 4] = ["--date", "-m", "--mode", "-t"];

/// Global, store-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GawakeConfig {
    /// When false, ticks never start a suspend cycle.
    pub enabled: bool,
    /// When false, rule pre-commands are never run.
    pub commands_enabled: bool,
    /// Read the clock in local time (`true`) or UTC (`false`).
    pub use_localtime: bool,
    /// Free-form options appended to every `rtcwake` invocation.
    pub rtcwake_options: String,
    /// Mode for manual schedules that do not name one.
    pub default_mode: PowerMode,
    /// Seconds after a wake rule's time during which a boot tick still
    /// runs the rule's command.
    pub boot_time_seconds: u16,
    /// Power off without an alarm when a sleep rule matches but no wake
    /// rule can be resolved.
    pub shutdown_on_failure: bool,
}

impl Default for GawakeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            commands_enabled: false,
            use_localtime: true,
            rtcwake_options: String::from(DEFAULT_RTCWAKE_OPTIONS),
            default_mode: PowerMode::Off,
            boot_time_seconds: DEFAULT_BOOT_TIME_SECONDS,
            shutdown_on_failure: false,
        }
    }
}

impl GawakeConfig {
    /// Validates every field that has constraints.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRtcwakeOptions` or
    /// `DomainError::InvalidBootTime`.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_rtcwake_options(&self.rtcwake_options)?;
        validate_boot_time(self.boot_time_seconds)
    }
}

/// Validates an `rtcwake` options string.
///
/// Gawake always supplies the wake date and mode itself, so the options
/// may not contain `--date`, `-t`, `-m` or `--mode`.
///
/// # Errors
///
/// Returns `DomainError::InvalidRtcwakeOptions` if a reserved flag is present.
pub fn validate_rtcwake_options(options: &str) -> Result<(), DomainError> {
    for token in options.split_whitespace() {
        let flag: &str = token.split('=').next().unwrap_or(token);
        if RESERVED_RTCWAKE_FLAGS.contains(&flag) {
            return Err(DomainError::InvalidRtcwakeOptions(format!(
                "'{flag}' is set by Gawake and cannot be part of the options"
            )));
        }
    }
    Ok(())
}

/// Validates the boot tolerance.
///
/// # Errors
///
/// Returns `DomainError::InvalidBootTime` above `MAX_BOOT_TIME_SECONDS`.
pub fn validate_boot_time(seconds: u16) -> Result<(), DomainError> {
    if seconds > MAX_BOOT_TIME_SECONDS {
        return Err(DomainError::InvalidBootTime(format!(
            "must be at most {MAX_BOOT_TIME_SECONDS} seconds, got {seconds}"
        )));
    }
    Ok(())
}
