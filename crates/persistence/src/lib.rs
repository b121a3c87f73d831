// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Gawake.
//!
//! This crate stores wake rules, sleep rules and the global configuration
//! in `SQLite` via Diesel. The schema is created by embedded migrations on
//! open.
//!
//! ## Concurrency
//!
//! The periodic tick and interactive CLI calls may open the same file at
//! once. Rule inserts run inside `BEGIN IMMEDIATE` so the conflict check and
//! the write cannot interleave with another writer.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller an isolated shared
//! in-memory database, so tests never touch the filesystem.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use gawake::{CoreError, RuleStore};
use gawake_domain::{GawakeConfig, RuleId, RuleKind, SleepRule, WakeRule};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// SQLite-backed rule store and configuration.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_gawake_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist; its parent directory must.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Reads the global configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored values are invalid.
    pub fn get_config(&mut self) -> Result<GawakeConfig, PersistenceError> {
        queries::get_config(&mut self.conn)
    }

    /// Replaces the global configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the write fails.
    pub fn update_config(&mut self, config: &GawakeConfig) -> Result<(), PersistenceError> {
        mutations::update_config(&mut self.conn, config)
    }

    /// Deletes every rule and restores the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset fails.
    pub fn reset_database(&mut self) -> Result<(), PersistenceError> {
        mutations::reset_database(&mut self.conn)
    }
}

impl RuleStore for Persistence {
    fn list_wake_rules(&mut self) -> Result<Vec<WakeRule>, CoreError> {
        Ok(queries::list_wake_rules(&mut self.conn, false)?)
    }

    fn list_sleep_rules(&mut self) -> Result<Vec<SleepRule>, CoreError> {
        Ok(queries::list_sleep_rules(&mut self.conn, false)?)
    }

    fn list_enabled_wake_rules(&mut self) -> Result<Vec<WakeRule>, CoreError> {
        Ok(queries::list_wake_rules(&mut self.conn, true)?)
    }

    fn list_enabled_sleep_rules(&mut self) -> Result<Vec<SleepRule>, CoreError> {
        Ok(queries::list_sleep_rules(&mut self.conn, true)?)
    }

    fn insert_wake_rule(&mut self, rule: WakeRule) -> Result<RuleId, CoreError> {
        Ok(mutations::insert_wake_rule(&mut self.conn, &rule)?)
    }

    fn insert_sleep_rule(&mut self, rule: SleepRule) -> Result<RuleId, CoreError> {
        Ok(mutations::insert_sleep_rule(&mut self.conn, &rule)?)
    }

    fn delete_rule(&mut self, kind: RuleKind, rule_id: RuleId) -> Result<(), CoreError> {
        Ok(mutations::delete_rule(&mut self.conn, kind, rule_id)?)
    }
}
