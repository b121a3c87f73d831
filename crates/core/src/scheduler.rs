// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::dispatch::{InvocationDescriptor, build_invocation_on};
use crate::error::CoreError;
use crate::resolver::{Occurrence, find_next_occurrence};
use crate::store::RuleStore;
use crate::tick::{TickMatch, WakeTickMatch, on_tick, on_wake_tick};
use gawake_domain::{
    GawakeConfig, RuleId, RuleKind, SleepRule, TimeOfDay, WakeRule, Weekday,
    validate_sleep_rule_fields, validate_wake_rule_fields,
};
use time::Date;
use tracing::{debug, info, warn};

/// What the periodic trigger should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickDecision {
    /// Scheduling is switched off.
    Disabled,
    /// No sleep rule is due.
    Idle,
    /// A sleep rule is due; arm the next wake and suspend.
    Suspend {
        /// The sleep rule that matched.
        sleep_rule: SleepRule,
        /// The next wake.
        invocation: InvocationDescriptor,
    },
    /// A sleep rule is due but no wake can be armed, and
    /// `shutdown_on_failure` is set; power off without an alarm.
    PowerOff {
        /// The sleep rule that matched.
        sleep_rule: SleepRule,
    },
}

/// What the boot-side trigger should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WakeTickDecision {
    /// Scheduling or commands are switched off.
    Disabled,
    /// No wake rule with a command is in its boot window.
    Idle,
    /// The machine woke for `rule`; run its command.
    RunCommand {
        /// The wake rule that matched.
        rule: WakeRule,
        /// The rule's command.
        command: String,
    },
}

/// Resolves the next wake from the stored rules.
///
/// The pre-command is dropped when `config.commands_enabled` is false.
///
/// # Errors
///
/// Returns `CoreError::NoRuleScheduled` if no enabled wake rule is active on
/// any weekday, or a store or date error.
pub fn schedule_next_wake<S, C>(
    store: &mut S,
    clock: &C,
    config: &GawakeConfig,
) -> Result<InvocationDescriptor, CoreError>
where
    S: RuleStore + ?Sized,
    C: Clock + ?Sized,
{
    let wake_rules: Vec<WakeRule> = store.list_enabled_wake_rules()?;
    let weekday: Weekday = clock.current_weekday();
    let now: TimeOfDay = clock.current_time_of_day();

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(weekday, now.hhmmss(), &wake_rules)?;
    debug!(
        days_ahead = occurrence.days_ahead,
        rule = occurrence.rule.name(),
        "Resolved next wake rule"
    );

    let wake_date: Date =
        clock.add_days(clock.current_date(), u32::from(occurrence.days_ahead))?;
    let invocation: InvocationDescriptor =
        build_invocation_on(wake_date, occurrence.rule, &config.rtcwake_options)?;

    if config.commands_enabled {
        Ok(invocation)
    } else {
        Ok(invocation.without_pre_command())
    }
}

/// Handles one periodic tick.
///
/// When a sleep rule is due but no wake rule exists, the decision is
/// `PowerOff` if `config.shutdown_on_failure` is set.
///
/// # Errors
///
/// Returns `CoreError::NoRuleScheduled` if a sleep rule is due, no wake
/// rule exists and `shutdown_on_failure` is off, or a store or date error.
pub fn handle_tick<S, C>(
    store: &mut S,
    clock: &C,
    config: &GawakeConfig,
) -> Result<TickDecision, CoreError>
where
    S: RuleStore + ?Sized,
    C: Clock + ?Sized,
{
    if !config.enabled {
        debug!("Scheduling disabled, ignoring tick");
        return Ok(TickDecision::Disabled);
    }

    let sleep_rules: Vec<SleepRule> = store.list_enabled_sleep_rules()?;
    let sleep_rule: SleepRule =
        match on_tick(clock.current_weekday(), clock.current_time_of_day(), &sleep_rules) {
            TickMatch::Matched { rule } => rule.clone(),
            TickMatch::NoMatch => return Ok(TickDecision::Idle),
        };

    info!(rule = sleep_rule.name(), "Sleep rule matched");
    match schedule_next_wake(store, clock, config) {
        Ok(invocation) => Ok(TickDecision::Suspend {
            sleep_rule,
            invocation,
        }),
        Err(CoreError::NoRuleScheduled) if config.shutdown_on_failure => {
            warn!(rule = sleep_rule.name(), "No wake rule scheduled, powering off");
            Ok(TickDecision::PowerOff { sleep_rule })
        }
        Err(e) => Err(e),
    }
}

/// Handles one boot-side tick, run shortly after the machine starts.
///
/// Matches today's enabled wake rules against
/// `config.boot_time_seconds` and returns the command of the earliest
/// match. Nothing runs unless both `enabled` and `commands_enabled` are set.
///
/// # Errors
///
/// Returns a store error.
pub fn handle_wake_tick<S, C>(
    store: &mut S,
    clock: &C,
    config: &GawakeConfig,
) -> Result<WakeTickDecision, CoreError>
where
    S: RuleStore + ?Sized,
    C: Clock + ?Sized,
{
    if !config.enabled || !config.commands_enabled {
        debug!("Scheduling or commands disabled, ignoring wake tick");
        return Ok(WakeTickDecision::Disabled);
    }

    let wake_rules: Vec<WakeRule> = store.list_enabled_wake_rules()?;
    let rule: &WakeRule = match on_wake_tick(
        clock.current_weekday(),
        clock.current_time_of_day(),
        &wake_rules,
        config.boot_time_seconds,
    ) {
        WakeTickMatch::Matched { rule } => rule,
        WakeTickMatch::NoMatch => return Ok(WakeTickDecision::Idle),
    };

    let Some(command) = rule.command() else {
        debug!(rule = rule.name(), "Wake rule matched but has no command");
        return Ok(WakeTickDecision::Idle);
    };

    info!(rule = rule.name(), command, "Wake rule matched on boot");
    Ok(WakeTickDecision::RunCommand {
        command: command.to_string(),
        rule: rule.clone(),
    })
}

/// Validates and stores a new wake rule.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if a field is invalid or the rule
/// conflicts with an existing one, or a store error.
pub fn add_wake_rule<S: RuleStore + ?Sized>(
    store: &mut S,
    rule: WakeRule,
) -> Result<RuleId, CoreError> {
    validate_wake_rule_fields(&rule)?;
    store.insert_wake_rule(rule)
}

/// Validates and stores a new sleep rule.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if a field is invalid or the rule
/// conflicts with an existing one, or a store error.
pub fn add_sleep_rule<S: RuleStore + ?Sized>(
    store: &mut S,
    rule: SleepRule,
) -> Result<RuleId, CoreError> {
    validate_sleep_rule_fields(&rule)?;
    store.insert_sleep_rule(rule)
}

/// Deletes a rule.
///
/// # Errors
///
/// Returns `CoreError::RuleNotFound` if no such rule exists.
pub fn delete_rule<S: RuleStore + ?Sized>(
    store: &mut S,
    kind: RuleKind,
    rule_id: RuleId,
) -> Result<(), CoreError> {
    store.delete_rule(kind, rule_id)
}
