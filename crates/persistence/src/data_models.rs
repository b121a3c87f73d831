// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types for the rule and config tables.
//!
//! Weekday columns are stored Sunday first, matching `WeekdayMask`.

use diesel::prelude::*;
use gawake_domain::{
    CanonicalTime, DomainError, GawakeConfig, PowerMode, ScheduledRule, SleepRule, SleepTime,
    WakeRule, WakeTime, Weekday, WeekdayMask,
};

use crate::diesel_schema::{config, sleep_rules, wake_rules};
use crate::error::PersistenceError;

/// Primary key of the single config row.
pub const CONFIG_ROW_ID: i64 = 1;

fn reconstruction_error(rule_id: i64, err: &DomainError) -> PersistenceError {
    PersistenceError::ReconstructionError(format!("rule {rule_id}: {err}"))
}

/// Diesel Queryable struct for wake rule rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = wake_rules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WakeRuleRow {
    pub rule_id: i64,
    pub rule_name: String,
    pub rule_time: String,
    pub sun: bool,
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
    pub command: Option<String>,
    pub mode: String,
    pub enabled: bool,
}

impl WakeRuleRow {
    /// Converts the row into a domain rule.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReconstructionError` if the stored time or
    /// mode is not valid.
    pub fn into_domain(self) -> Result<WakeRule, PersistenceError> {
        let rule_id: i64 = self.rule_id;
        let time: WakeTime =
            WakeTime::parse(&self.rule_time).map_err(|e| reconstruction_error(rule_id, &e))?;
        let mode: PowerMode = self
            .mode
            .parse::<PowerMode>()
            .map_err(|e| reconstruction_error(rule_id, &e))?;
        let weekdays: WeekdayMask = WeekdayMask::new([
            self.sun, self.mon, self.tue, self.wed, self.thu, self.fri, self.sat,
        ]);

        Ok(
            WakeRule::new(&self.rule_name, time, weekdays, self.command.as_deref(), mode)
                .with_id(rule_id)
                .with_enabled(self.enabled),
        )
    }
}

/// Diesel Queryable struct for sleep rule rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sleep_rules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SleepRuleRow {
    pub rule_id: i64,
    pub rule_name: String,
    pub rule_time: String,
    pub sun: bool,
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
    pub enabled: bool,
}

impl SleepRuleRow {
    /// Converts the row into a domain rule.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReconstructionError` if the stored time is
    /// not valid.
    pub fn into_domain(self) -> Result<SleepRule, PersistenceError> {
        let rule_id: i64 = self.rule_id;
        let time: SleepTime =
            SleepTime::parse(&self.rule_time).map_err(|e| reconstruction_error(rule_id, &e))?;
        let weekdays: WeekdayMask = WeekdayMask::new([
            self.sun, self.mon, self.tue, self.wed, self.thu, self.fri, self.sat,
        ]);

        Ok(SleepRule::new(&self.rule_name, time, weekdays)
            .with_id(rule_id)
            .with_enabled(self.enabled))
    }
}

/// Insertable form of a wake rule.
#[derive(Insertable)]
#[diesel(table_name = wake_rules)]
pub struct NewWakeRule<'a> {
    pub rule_name: &'a str,
    pub rule_time: &'a str,
    pub sun: bool,
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
    pub command: Option<&'a str>,
    pub mode: &'a str,
    pub enabled: bool,
}

impl<'a> From<&'a WakeRule> for NewWakeRule<'a> {
    fn from(rule: &'a WakeRule) -> Self {
        let days: WeekdayMask = *rule.weekdays();
        Self {
            rule_name: rule.name(),
            rule_time: rule.time().as_str(),
            sun: days.is_active(Weekday::Sunday),
            mon: days.is_active(Weekday::Monday),
            tue: days.is_active(Weekday::Tuesday),
            wed: days.is_active(Weekday::Wednesday),
            thu: days.is_active(Weekday::Thursday),
            fri: days.is_active(Weekday::Friday),
            sat: days.is_active(Weekday::Saturday),
            command: rule.command(),
            mode: rule.mode().as_str(),
            enabled: rule.is_enabled(),
        }
    }
}

/// Insertable form of a sleep rule.
#[derive(Insertable)]
#[diesel(table_name = sleep_rules)]
pub struct NewSleepRule<'a> {
    pub rule_name: &'a str,
    pub rule_time: &'a str,
    pub sun: bool,
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
    pub enabled: bool,
}

impl<'a> From<&'a SleepRule> for NewSleepRule<'a> {
    fn from(rule: &'a SleepRule) -> Self {
        let days: WeekdayMask = *rule.weekdays();
        Self {
            rule_name: rule.name(),
            rule_time: rule.time().as_str(),
            sun: days.is_active(Weekday::Sunday),
            mon: days.is_active(Weekday::Monday),
            tue: days.is_active(Weekday::Tuesday),
            wed: days.is_active(Weekday::Wednesday),
            thu: days.is_active(Weekday::Thursday),
            fri: days.is_active(Weekday::Friday),
            sat: days.is_active(Weekday::Saturday),
            enabled: rule.is_enabled(),
        }
    }
}

/// The config row, read and written whole.
#[derive(Queryable, Selectable, Insertable)]
#[diesel(table_name = config)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ConfigRow {
    pub config_id: i64,
    pub enabled: bool,
    pub commands_enabled: bool,
    pub use_localtime: bool,
    pub rtcwake_options: String,
    pub default_mode: String,
    pub boot_time_seconds: i32,
    pub shutdown_on_failure: bool,
}

impl ConfigRow {
    /// Converts the row into the domain configuration.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReconstructionError` if the stored default
    /// mode or boot time is not valid.
    pub fn into_domain(self) -> Result<GawakeConfig, PersistenceError> {
        let default_mode: PowerMode = self.default_mode.parse::<PowerMode>().map_err(|e| {
            PersistenceError::ReconstructionError(format!("config default mode: {e}"))
        })?;
        let boot_time_seconds: u16 = u16::try_from(self.boot_time_seconds).map_err(|e| {
            PersistenceError::ReconstructionError(format!(
                "config boot time {}: {e}",
                self.boot_time_seconds
            ))
        })?;

        Ok(GawakeConfig {
            enabled: self.enabled,
            commands_enabled: self.commands_enabled,
            use_localtime: self.use_localtime,
            rtcwake_options: self.rtcwake_options,
            default_mode,
            boot_time_seconds,
            shutdown_on_failure: self.shutdown_on_failure,
        })
    }
}

impl From<&GawakeConfig> for ConfigRow {
    fn from(value: &GawakeConfig) -> Self {
        Self {
            config_id: CONFIG_ROW_ID,
            enabled: value.enabled,
            commands_enabled: value.commands_enabled,
            use_localtime: value.use_localtime,
            rtcwake_options: value.rtcwake_options.clone(),
            default_mode: value.default_mode.as_str().to_string(),
            boot_time_seconds: i32::from(value.boot_time_seconds),
            shutdown_on_failure: value.shutdown_on_failure,
        }
    }
}
