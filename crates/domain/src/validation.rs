// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::canonical_time::CanonicalTime;
use crate::error::DomainError;
use crate::types::{ScheduledRule, SleepRule, WakeRule};

/// Longest accepted rule name, in characters.
pub const MAX_RULE_NAME_LENGTH: usize = 32;

/// Longest accepted pre-command, in characters.
pub const MAX_COMMAND_LENGTH: usize = 128;

/// Validates a rule name.
///
/// # Errors
///
/// Returns `DomainError::InvalidRuleName` if the name is empty or longer
/// than `MAX_RULE_NAME_LENGTH` characters.
pub fn validate_rule_name(name: &str) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if name.trim().is_empty() {
        return Err(DomainError::InvalidRuleName(String::from(
            "Name cannot be empty",
        )));
    }

    let length: usize = name.chars().count();
    if length > MAX_RULE_NAME_LENGTH {
        return Err(DomainError::InvalidRuleName(format!(
            "Name must be at most {MAX_RULE_NAME_LENGTH} characters, got {length}"
        )));
    }

    Ok(())
}

/// Validates a pre-command.
///
/// # Errors
///
/// Returns `DomainError::InvalidCommand` if the command is longer than
/// `MAX_COMMAND_LENGTH` characters.
pub fn validate_command(command: Option<&str>) -> Result<(), DomainError> {
    let Some(command) = command else {
        return Ok(());
    };

    let length: usize = command.chars().count();
    if length > MAX_COMMAND_LENGTH {
        return Err(DomainError::InvalidCommand(format!(
            "Command must be at most {MAX_COMMAND_LENGTH} characters, got {length}"
        )));
    }

    Ok(())
}

/// Validates a wake rule's field constraints.
///
/// Time and weekday mask are validated when they are parsed; this checks
/// the free-text fields. It does NOT check for conflicts (that requires
/// the existing rules).
///
/// # Errors
///
/// Returns an error if the name or command is invalid.
pub fn validate_wake_rule_fields(rule: &WakeRule) -> Result<(), DomainError> {
    validate_rule_name(rule.name())?;
    validate_command(rule.command())
}

/// Validates a sleep rule's field constraints.
///
/// # Errors
///
/// Returns an error if the name is invalid.
pub fn validate_sleep_rule_fields(rule: &SleepRule) -> Result<(), DomainError> {
    validate_rule_name(rule.name())
}

/// Validates that a candidate rule does not collide with an existing one.
///
/// For every weekday the candidate is active on, no existing *enabled*
/// rule active that day may share its canonical time. The whole insert is
/// rejected on the first collision, scanning Sunday to Saturday. A disabled
/// candidate never takes part in scheduling and is always accepted.
///
/// This function is pure, deterministic, and has no side effects. Stores
/// must call it inside the same transaction as the insert.
///
/// # Errors
///
/// Returns `DomainError::DuplicateScheduleConflict` naming the first
/// colliding weekday and the shared time.
pub fn validate_insert<R: ScheduledRule>(candidate: &R, existing: &[R]) -> Result<(), DomainError> {
    if !candidate.is_enabled() {
        return Ok(());
    }

    for weekday in candidate.weekdays().active_days() {
        let collides: bool = existing
            .iter()
            .filter(|rule| rule.is_enabled() && rule.weekdays().is_active(weekday))
            .any(|rule| rule.time_value() == candidate.time_value());

        if collides {
            return Err(DomainError::DuplicateScheduleConflict {
                weekday,
                time: candidate.time().as_str().to_string(),
            });
        }
    }

    Ok(())
}
