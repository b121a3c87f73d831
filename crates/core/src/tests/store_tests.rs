// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_sleep_rule, create_test_wake_rule};
use crate::{CoreError, MemoryRuleStore, RuleStore};
use gawake_domain::{DomainError, RuleId, RuleKind, ScheduledRule, WakeRule, Weekday};

#[test]
fn test_insert_assigns_increasing_ids() {
    let mut store: MemoryRuleStore = MemoryRuleStore::new();

    let first: RuleId = store
        .insert_wake_rule(create_test_wake_rule("A", "060000", &[Weekday::Monday]))
        .unwrap();
    let second: RuleId = store
        .insert_wake_rule(create_test_wake_rule("B", "070000", &[Weekday::Monday]))
        .unwrap();

    assert_eq!((first, second), (1, 2));
    let rules: Vec<WakeRule> = store.list_wake_rules().unwrap();
    assert_eq!(rules[0].rule_id(), Some(1));
    assert_eq!(rules[1].name(), "B");
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let mut store: MemoryRuleStore = MemoryRuleStore::new();
    let first: RuleId = store
        .insert_sleep_rule(create_test_sleep_rule("A", "2200", &[Weekday::Friday]))
        .unwrap();
    store.delete_rule(RuleKind::Sleep, first).unwrap();

    let second: RuleId = store
        .insert_sleep_rule(create_test_sleep_rule("B", "2200", &[Weekday::Friday]))
        .unwrap();

    assert!(second > first);
}

#[test]
fn test_conflicting_insert_writes_nothing() {
    let mut store: MemoryRuleStore = MemoryRuleStore::new();
    store
        .insert_wake_rule(create_test_wake_rule("A", "080000", &[Weekday::Monday]))
        .unwrap();

    let result: Result<RuleId, CoreError> =
        store.insert_wake_rule(create_test_wake_rule("B", "080000", &[Weekday::Monday]));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::DuplicateScheduleConflict {
                weekday: Weekday::Monday,
                ..
            }
        ))
    ));
    assert_eq!(store.list_wake_rules().unwrap().len(), 1);
}

#[test]
fn test_disabled_rule_does_not_block_insert() {
    let mut store: MemoryRuleStore = MemoryRuleStore::new();
    store
        .insert_wake_rule(
            create_test_wake_rule("Off", "080000", &[Weekday::Monday]).with_enabled(false),
        )
        .unwrap();

    let result: Result<RuleId, CoreError> =
        store.insert_wake_rule(create_test_wake_rule("On", "080000", &[Weekday::Monday]));
    assert!(result.is_ok());
}

#[test]
fn test_list_enabled_filters_disabled_rules() {
    let mut store: MemoryRuleStore = MemoryRuleStore::new();
    store
        .insert_wake_rule(create_test_wake_rule("On", "080000", &[Weekday::Monday]))
        .unwrap();
    store
        .insert_wake_rule(
            create_test_wake_rule("Off", "090000", &[Weekday::Monday]).with_enabled(false),
        )
        .unwrap();

    let enabled: Vec<WakeRule> = store.list_enabled_wake_rules().unwrap();
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].name(), "On");
    assert_eq!(store.list_wake_rules().unwrap().len(), 2);
}

#[test]
fn test_delete_missing_rule_is_not_found() {
    let mut store: MemoryRuleStore = MemoryRuleStore::new();
    store
        .insert_wake_rule(create_test_wake_rule("A", "080000", &[Weekday::Monday]))
        .unwrap();

    let result: Result<(), CoreError> = store.delete_rule(RuleKind::Sleep, 1);
    assert_eq!(
        result,
        Err(CoreError::RuleNotFound {
            kind: RuleKind::Sleep,
            rule_id: 1,
        })
    );
}
