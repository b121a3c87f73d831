// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule mutations.
//!
//! Inserts read the enabled rules and write the new row inside one
//! `BEGIN IMMEDIATE` transaction, so two processes cannot both pass the
//! conflict check for the same slot.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gawake_domain::{RuleId, RuleKind, SleepRule, WakeRule, validate_insert};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewSleepRule, NewWakeRule};
use crate::diesel_schema::{sleep_rules, wake_rules};
use crate::error::PersistenceError;
use crate::queries::{list_sleep_rules, list_wake_rules};

/// Validates and inserts a wake rule.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `rule` - The candidate rule
///
/// # Errors
///
/// Returns `PersistenceError::DomainViolation` if the rule conflicts with an
/// enabled wake rule. Nothing is written in that case.
pub fn insert_wake_rule(
    conn: &mut SqliteConnection,
    rule: &WakeRule,
) -> Result<RuleId, PersistenceError> {
    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let existing: Vec<WakeRule> = list_wake_rules(conn, true)?;
        validate_insert(rule, &existing)?;

        diesel::insert_into(wake_rules::table)
            .values(NewWakeRule::from(rule))
            .execute(conn)?;
        let rule_id: RuleId = get_last_insert_rowid(conn)?;

        info!(rule_id, name = rule.name(), "Created wake rule");
        Ok(rule_id)
    })
}

/// Validates and inserts a sleep rule.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `rule` - The candidate rule
///
/// # Errors
///
/// Returns `PersistenceError::DomainViolation` if the rule conflicts with an
/// enabled sleep rule. Nothing is written in that case.
pub fn insert_sleep_rule(
    conn: &mut SqliteConnection,
    rule: &SleepRule,
) -> Result<RuleId, PersistenceError> {
    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let existing: Vec<SleepRule> = list_sleep_rules(conn, true)?;
        validate_insert(rule, &existing)?;

        diesel::insert_into(sleep_rules::table)
            .values(NewSleepRule::from(rule))
            .execute(conn)?;
        let rule_id: RuleId = get_last_insert_rowid(conn)?;

        info!(rule_id, name = rule.name(), "Created sleep rule");
        Ok(rule_id)
    })
}

/// Deletes a rule.
///
/// # Errors
///
/// Returns `PersistenceError::RuleNotFound` if no row was deleted.
pub fn delete_rule(
    conn: &mut SqliteConnection,
    kind: RuleKind,
    rule_id: RuleId,
) -> Result<(), PersistenceError> {
    debug!(%kind, rule_id, "Deleting rule");

    let deleted: usize = match kind {
        RuleKind::Wake => {
            diesel::delete(wake_rules::table.filter(wake_rules::rule_id.eq(rule_id)))
                .execute(conn)?
        }
        RuleKind::Sleep => {
            diesel::delete(sleep_rules::table.filter(sleep_rules::rule_id.eq(rule_id)))
                .execute(conn)?
        }
    };

    if deleted == 0 {
        return Err(PersistenceError::RuleNotFound { kind, rule_id });
    }

    info!(%kind, rule_id, "Deleted rule");
    Ok(())
}
