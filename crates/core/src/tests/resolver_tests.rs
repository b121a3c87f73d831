// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_sleep_rule, create_test_wake_rule};
use crate::{CoreError, Occurrence, find_next_occurrence};
use gawake_domain::{CanonicalTime, ScheduledRule, SleepRule, WakeRule, Weekday};

#[test]
fn test_later_rule_today_is_chosen() {
    let rules: Vec<WakeRule> = vec![create_test_wake_rule("Monday", "080000", &[Weekday::Monday])];

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(Weekday::Monday, 70_000, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 0);
    assert_eq!(occurrence.rule.name(), "Monday");
}

#[test]
fn test_forward_pass_finds_next_active_day() {
    let rules: Vec<WakeRule> = vec![
        create_test_wake_rule("Monday", "080000", &[Weekday::Monday]),
        create_test_wake_rule("Wednesday", "090000", &[Weekday::Wednesday]),
    ];

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(Weekday::Monday, 100_000, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 2);
    assert_eq!(occurrence.rule.name(), "Wednesday");
}

#[test]
fn test_exact_current_time_counts_as_elapsed() {
    let rules: Vec<WakeRule> = vec![create_test_wake_rule("Only", "080000", &[Weekday::Monday])];

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(Weekday::Monday, 80_000, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 7);
    assert_eq!(occurrence.rule.name(), "Only");
}

#[test]
fn test_same_day_picks_next_rule_between_two() {
    let rules: Vec<WakeRule> = vec![
        create_test_wake_rule("Late", "180000", &[Weekday::Thursday]),
        create_test_wake_rule("Early", "060000", &[Weekday::Thursday]),
    ];

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(Weekday::Thursday, 120_000, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 0);
    assert_eq!(occurrence.rule.name(), "Late");
}

#[test]
fn test_forward_pass_sorts_regardless_of_input_order() {
    let rules: Vec<WakeRule> = vec![
        create_test_wake_rule("Tuesday late", "210000", &[Weekday::Tuesday]),
        create_test_wake_rule("Tuesday early", "050000", &[Weekday::Tuesday]),
        create_test_wake_rule("Tuesday noon", "120000", &[Weekday::Tuesday]),
    ];

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(Weekday::Monday, 230_000, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 1);
    assert_eq!(occurrence.rule.name(), "Tuesday early");
}

#[test]
fn test_forward_pass_wraps_into_next_week() {
    let rules: Vec<WakeRule> = vec![create_test_wake_rule("Sunday", "090000", &[Weekday::Sunday])];

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(Weekday::Friday, 0, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 2);
    assert_eq!(occurrence.rule.name(), "Sunday");
}

#[test]
fn test_earlier_rule_today_falls_to_next_week() {
    let rules: Vec<WakeRule> = vec![create_test_wake_rule("Saturday", "060000", &[Weekday::Saturday])];

    let occurrence: Occurrence<'_, WakeRule> =
        find_next_occurrence(Weekday::Saturday, 235_959, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 7);
}

#[test]
fn test_empty_rule_set_is_not_scheduled() {
    let rules: Vec<WakeRule> = Vec::new();

    for weekday in Weekday::ALL {
        for now in [0, 80_000, 235_959] {
            let result: Result<Occurrence<'_, WakeRule>, CoreError> =
                find_next_occurrence(weekday, now, &rules);
            assert_eq!(result, Err(CoreError::NoRuleScheduled));
        }
    }
}

#[test]
fn test_disabled_rules_are_ignored() {
    let rules: Vec<WakeRule> = vec![
        create_test_wake_rule("Off", "080000", &Weekday::ALL).with_enabled(false),
    ];

    let result: Result<Occurrence<'_, WakeRule>, CoreError> =
        find_next_occurrence(Weekday::Monday, 0, &rules);
    assert_eq!(result, Err(CoreError::NoRuleScheduled));
}

#[test]
fn test_empty_mask_rule_never_fires() {
    let rules: Vec<WakeRule> = vec![create_test_wake_rule("Never", "080000", &[])];

    let result: Result<Occurrence<'_, WakeRule>, CoreError> =
        find_next_occurrence(Weekday::Monday, 0, &rules);
    assert_eq!(result, Err(CoreError::NoRuleScheduled));
}

#[test]
fn test_any_enabled_rule_is_always_reachable() {
    let rules: Vec<WakeRule> = vec![
        create_test_wake_rule("Tue", "063000", &[Weekday::Tuesday]),
        create_test_wake_rule("Weekend", "100000", &[Weekday::Saturday, Weekday::Sunday]),
    ];

    for weekday in Weekday::ALL {
        for now in (0..240_000).step_by(10_000) {
            let occurrence: Occurrence<'_, WakeRule> =
                find_next_occurrence(weekday, now, &rules).unwrap();
            assert!(occurrence.days_ahead <= 7);
            let fires_on: Weekday = weekday.offset(usize::from(occurrence.days_ahead));
            assert!(occurrence.rule.weekdays().is_active(fires_on));
            if occurrence.days_ahead == 0 {
                assert!(occurrence.rule.time_value() > now);
            }
        }
    }
}

#[test]
fn test_resolver_works_for_sleep_rules() {
    let rules: Vec<SleepRule> = vec![
        create_test_sleep_rule("Night", "2230", &[Weekday::Friday]),
        create_test_sleep_rule("Nap", "1300", &[Weekday::Friday]),
    ];

    let occurrence: Occurrence<'_, SleepRule> =
        find_next_occurrence(Weekday::Friday, 1200, &rules).unwrap();

    assert_eq!(occurrence.days_ahead, 0);
    assert_eq!(occurrence.rule.time().as_str(), "1300");
}
