// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gawake_domain::GawakeConfig;
use tracing::{debug, warn};

use crate::data_models::{CONFIG_ROW_ID, ConfigRow};
use crate::diesel_schema::config;
use crate::error::PersistenceError;

/// Reads the global configuration.
///
/// A missing row reads as the defaults.
///
/// # Errors
///
/// Returns an error if the query fails or the stored values are invalid.
pub fn get_config(conn: &mut SqliteConnection) -> Result<GawakeConfig, PersistenceError> {
    let row: Option<ConfigRow> = config::table
        .filter(config::config_id.eq(CONFIG_ROW_ID))
        .select(ConfigRow::as_select())
        .first(conn)
        .optional()?;

    match row {
        Some(row) => {
            debug!("Loaded configuration");
            row.into_domain()
        }
        None => {
            warn!("Configuration row missing, using defaults");
            Ok(GawakeConfig::default())
        }
    }
}
