// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use gawake_domain::{RuleId, RuleKind, ScheduledRule, SleepRule, WakeRule, validate_insert};
use tracing::{debug, info};

/// Storage for wake and sleep rules.
///
/// Listings return rules in insertion order. Implementations must run the
/// conflict check and the insert as a single atomic step.
pub trait RuleStore {
    /// Lists every wake rule, enabled or not.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Store` if the store cannot be read.
    fn list_wake_rules(&mut self) -> Result<Vec<WakeRule>, CoreError>;

    /// Lists every sleep rule, enabled or not.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Store` if the store cannot be read.
    fn list_sleep_rules(&mut self) -> Result<Vec<SleepRule>, CoreError>;

    /// Lists the wake rules that take part in scheduling.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Store` if the store cannot be read.
    fn list_enabled_wake_rules(&mut self) -> Result<Vec<WakeRule>, CoreError> {
        let mut rules: Vec<WakeRule> = self.list_wake_rules()?;
        rules.retain(ScheduledRule::is_enabled);
        Ok(rules)
    }

    /// Lists the sleep rules that take part in scheduling.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Store` if the store cannot be read.
    fn list_enabled_sleep_rules(&mut self) -> Result<Vec<SleepRule>, CoreError> {
        let mut rules: Vec<SleepRule> = self.list_sleep_rules()?;
        rules.retain(ScheduledRule::is_enabled);
        Ok(rules)
    }

    /// Validates `rule` against the stored enabled wake rules and inserts it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateScheduleConflict` (wrapped) if the rule
    /// collides, or `CoreError::Store` on storage failure. Nothing is
    /// written on error.
    fn insert_wake_rule(&mut self, rule: WakeRule) -> Result<RuleId, CoreError>;

    /// Validates `rule` against the stored enabled sleep rules and inserts it.
    ///
    /// # Errors
    ///
    /// See `insert_wake_rule`.
    fn insert_sleep_rule(&mut self, rule: SleepRule) -> Result<RuleId, CoreError>;

    /// Deletes a rule by kind and id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RuleNotFound` if no such rule exists.
    fn delete_rule(&mut self, kind: RuleKind, rule_id: RuleId) -> Result<(), CoreError>;
}

/// An in-process rule store.
///
/// Identifiers are assigned from per-kind counters and never reused.
#[derive(Debug, Clone)]
pub struct MemoryRuleStore {
    wake_rules: Vec<WakeRule>,
    sleep_rules: Vec<SleepRule>,
    last_wake_id: RuleId,
    last_sleep_id: RuleId,
}

impl Default for MemoryRuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRuleStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wake_rules: Vec::new(),
            sleep_rules: Vec::new(),
            last_wake_id: 0,
            last_sleep_id: 0,
        }
    }
}

/// Removes the rule with `rule_id`, returning whether one was found.
fn remove_by_id<R: ScheduledRule>(rules: &mut Vec<R>, rule_id: RuleId) -> bool {
    let before: usize = rules.len();
    rules.retain(|rule| rule.rule_id() != Some(rule_id));
    rules.len() != before
}

impl RuleStore for MemoryRuleStore {
    fn list_wake_rules(&mut self) -> Result<Vec<WakeRule>, CoreError> {
        debug!(count = self.wake_rules.len(), "Listing wake rules");
        Ok(self.wake_rules.clone())
    }

    fn list_sleep_rules(&mut self) -> Result<Vec<SleepRule>, CoreError> {
        debug!(count = self.sleep_rules.len(), "Listing sleep rules");
        Ok(self.sleep_rules.clone())
    }

    fn insert_wake_rule(&mut self, rule: WakeRule) -> Result<RuleId, CoreError> {
        validate_insert(&rule, &self.wake_rules)?;

        self.last_wake_id += 1;
        let rule_id: RuleId = self.last_wake_id;
        info!(rule_id, name = rule.name(), "Inserted wake rule");
        self.wake_rules.push(rule.with_id(rule_id));
        Ok(rule_id)
    }

    fn insert_sleep_rule(&mut self, rule: SleepRule) -> Result<RuleId, CoreError> {
        validate_insert(&rule, &self.sleep_rules)?;

        self.last_sleep_id += 1;
        let rule_id: RuleId = self.last_sleep_id;
        info!(rule_id, name = rule.name(), "Inserted sleep rule");
        self.sleep_rules.push(rule.with_id(rule_id));
        Ok(rule_id)
    }

    fn delete_rule(&mut self, kind: RuleKind, rule_id: RuleId) -> Result<(), CoreError> {
        let removed: bool = match kind {
            RuleKind::Wake => remove_by_id(&mut self.wake_rules, rule_id),
            RuleKind::Sleep => remove_by_id(&mut self.sleep_rules, rule_id),
        };

        if !removed {
            return Err(CoreError::RuleNotFound { kind, rule_id });
        }

        info!(%kind, rule_id, "Deleted rule");
        Ok(())
    }
}
