// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gawake_domain::{ScheduledRule, SleepRule, TimeOfDay, WakeRule, Weekday};

/// Grace period after a sleep rule's time during which a tick still matches.
pub const TICK_TOLERANCE_MINUTES: u32 = 5;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMatch<'a> {
    /// A sleep rule is due now.
    Matched {
        /// The first due rule by time.
        rule: &'a SleepRule,
    },
    /// No sleep rule is due.
    NoMatch,
}

/// Checks whether any sleep rule is due at `now`.
///
/// A rule active on `current_weekday` is due when `now`, at minute
/// precision, lies in `[rule time, rule time + TICK_TOLERANCE_MINUTES)`.
/// When several rules are due the earliest time wins.
#[must_use]
pub fn on_tick(current_weekday: Weekday, now: TimeOfDay, sleep_rules: &[SleepRule]) -> TickMatch<'_> {
    let now_minutes: u32 = now.minutes_since_midnight();

    sleep_rules
        .iter()
        .filter(|rule| rule.is_enabled() && rule.weekdays().is_active(current_weekday))
        .filter(|rule| {
            let start: u32 = rule.time().minutes_since_midnight();
            (start..start + TICK_TOLERANCE_MINUTES).contains(&now_minutes)
        })
        .min_by_key(|rule| rule.time_value())
        .map_or(TickMatch::NoMatch, |rule| TickMatch::Matched { rule })
}

/// Outcome of a boot-side tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeTickMatch<'a> {
    /// The machine woke for this rule.
    Matched {
        /// The earliest wake rule whose window holds now.
        rule: &'a WakeRule,
    },
    /// No wake rule is in its boot window.
    NoMatch,
}

/// Checks whether the machine is within `boot_time_seconds` after a wake
/// rule's time.
///
/// A rule active on `current_weekday` matches when `now`, at second
/// precision, lies in `[rule time, rule time + boot_time_seconds]`. Both
/// bounds are inclusive. When several rules match the earliest time wins.
#[must_use]
pub fn on_wake_tick(
    current_weekday: Weekday,
    now: TimeOfDay,
    wake_rules: &[WakeRule],
    boot_time_seconds: u16,
) -> WakeTickMatch<'_> {
    let now_seconds: u32 = now.seconds_since_midnight();

    wake_rules
        .iter()
        .filter(|rule| rule.is_enabled() && rule.weekdays().is_active(current_weekday))
        .filter(|rule| {
            let start: u32 = rule.time().seconds_since_midnight();
            (start..=start + u32::from(boot_time_seconds)).contains(&now_seconds)
        })
        .min_by_key(|rule| rule.time_value())
        .map_or(WakeTickMatch::NoMatch, |rule| WakeTickMatch::Matched { rule })
}
