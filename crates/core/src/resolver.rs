// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use gawake_domain::{ScheduledRule, Weekday};

/// Furthest a forward search looks, in days.
const MAX_DAYS_AHEAD: u8 = 7;

/// The next firing of a rule relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a, R> {
    /// Whole days from today, `0..=7`.
    pub days_ahead: u8,
    /// The rule that fires.
    pub rule: &'a R,
}

/// Enabled rules active on `weekday`, ascending by canonical time.
fn rules_on<R: ScheduledRule>(rules: &[R], weekday: Weekday) -> Vec<&R> {
    let mut active: Vec<&R> = rules
        .iter()
        .filter(|rule| rule.is_enabled() && rule.weekdays().is_active(weekday))
        .collect();
    active.sort_by_key(|rule| rule.time_value());
    active
}

/// Finds the earliest future occurrence of any enabled rule.
///
/// The search runs in two passes:
///
/// 1. Today: the earliest rule whose time is strictly later than
///    `current_time_value`. A rule at exactly the current time has already
///    elapsed.
/// 2. Days `1..=7` ahead: the earliest rule of the first day with any
///    active rule. Offset 7 is today's weekday next week.
///
/// `current_time_value` must use the same encoding as the rule kind's
/// canonical time (`HHMMSS` for wake rules).
///
/// # Arguments
///
/// * `current_weekday` - Today
/// * `current_time_value` - The current time as a canonical integer
/// * `rules` - Candidate rules, in any order
///
/// # Errors
///
/// Returns `CoreError::NoRuleScheduled` if no enabled rule is active on
/// any weekday.
pub fn find_next_occurrence<R: ScheduledRule>(
    current_weekday: Weekday,
    current_time_value: u32,
    rules: &[R],
) -> Result<Occurrence<'_, R>, CoreError> {
    if let Some(rule) = rules_on(rules, current_weekday)
        .into_iter()
        .find(|rule| rule.time_value() > current_time_value)
    {
        return Ok(Occurrence {
            days_ahead: 0,
            rule,
        });
    }

    for offset in 1..=MAX_DAYS_AHEAD {
        let weekday: Weekday = current_weekday.offset(usize::from(offset));
        if let Some(rule) = rules_on(rules, weekday).into_iter().next() {
            return Ok(Occurrence {
                days_ahead: offset,
                rule,
            });
        }
    }

    Err(CoreError::NoRuleScheduled)
}
