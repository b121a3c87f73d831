// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gawake_domain::GawakeConfig;
use tracing::{info, warn};

use crate::data_models::ConfigRow;
use crate::diesel_schema::{config, sleep_rules, wake_rules};
use crate::error::PersistenceError;

/// Replaces the global configuration.
///
/// # Errors
///
/// Returns `PersistenceError::DomainViolation` if the rtcwake options
/// contain reserved flags or the boot time is out of range, or a database
/// error.
pub fn update_config(
    conn: &mut SqliteConnection,
    new_config: &GawakeConfig,
) -> Result<(), PersistenceError> {
    new_config.validate()?;

    diesel::replace_into(config::table)
        .values(ConfigRow::from(new_config))
        .execute(conn)?;

    info!(
        enabled = new_config.enabled,
        commands_enabled = new_config.commands_enabled,
        use_localtime = new_config.use_localtime,
        rtcwake_options = %new_config.rtcwake_options,
        default_mode = %new_config.default_mode,
        boot_time_seconds = new_config.boot_time_seconds,
        shutdown_on_failure = new_config.shutdown_on_failure,
        "Updated configuration"
    );
    Ok(())
}

/// Deletes every rule and restores the default configuration.
///
/// The `AUTOINCREMENT` sequences are kept, so ids issued before the reset
/// are never handed out again.
///
/// # Errors
///
/// Returns an error if any statement fails; nothing is changed in that case.
pub fn reset_database(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    warn!("Resetting database: deleting all rules and restoring default configuration");

    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let wake_count: usize = diesel::delete(wake_rules::table).execute(conn)?;
        let sleep_count: usize = diesel::delete(sleep_rules::table).execute(conn)?;

        diesel::replace_into(config::table)
            .values(ConfigRow::from(&GawakeConfig::default()))
            .execute(conn)?;

        info!(wake_count, sleep_count, "Database reset complete");
        Ok(())
    })
}
