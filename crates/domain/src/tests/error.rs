// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Weekday};

#[test]
fn test_duplicate_conflict_names_day_and_time() {
    let error: DomainError = DomainError::DuplicateScheduleConflict {
        weekday: Weekday::Tuesday,
        time: String::from("070000"),
    };
    let message: String = error.to_string();
    assert!(message.contains("Tuesday"));
    assert!(message.contains("070000"));
}

#[test]
fn test_invalid_timestamp_display() {
    let error: DomainError = DomainError::InvalidTimestamp {
        input: String::from("2026"),
        reason: String::from("expected 14 digits"),
    };
    assert_eq!(
        error.to_string(),
        "Invalid timestamp '2026': expected 14 digits"
    );
}

#[test]
fn test_rule_kind_error_lists_expected_values() {
    let error: DomainError = DomainError::InvalidRuleKind(String::from("nap"));
    assert!(error.to_string().contains("'wake' or 'sleep'"));
}

#[test]
fn test_domain_error_is_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(DomainError::InvalidPowerMode(String::from("hibernate")));
    assert_eq!(error.to_string(), "Invalid power mode: 'hibernate'");
}
