// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule queries.
//!
//! Listings are ordered by `rule_id`, which is insertion order.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gawake_domain::{SleepRule, WakeRule};
use tracing::debug;

use crate::data_models::{SleepRuleRow, WakeRuleRow};
use crate::diesel_schema::{sleep_rules, wake_rules};
use crate::error::PersistenceError;

/// Lists wake rules.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `enabled_only` - Skip rules whose `enabled` flag is false
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_wake_rules(
    conn: &mut SqliteConnection,
    enabled_only: bool,
) -> Result<Vec<WakeRule>, PersistenceError> {
    let mut query = wake_rules::table
        .select(WakeRuleRow::as_select())
        .order(wake_rules::rule_id.asc())
        .into_boxed();
    if enabled_only {
        query = query.filter(wake_rules::enabled.eq(true));
    }

    let rows: Vec<WakeRuleRow> = query.load(conn)?;
    debug!(count = rows.len(), enabled_only, "Loaded wake rules");

    rows.into_iter().map(WakeRuleRow::into_domain).collect()
}

/// Lists sleep rules.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `enabled_only` - Skip rules whose `enabled` flag is false
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_sleep_rules(
    conn: &mut SqliteConnection,
    enabled_only: bool,
) -> Result<Vec<SleepRule>, PersistenceError> {
    let mut query = sleep_rules::table
        .select(SleepRuleRow::as_select())
        .order(sleep_rules::rule_id.asc())
        .into_boxed();
    if enabled_only {
        query = query.filter(sleep_rules::enabled.eq(true));
    }

    let rows: Vec<SleepRuleRow> = query.load(conn)?;
    debug!(count = rows.len(), enabled_only, "Loaded sleep rules");

    rows.into_iter().map(SleepRuleRow::into_domain).collect()
}
