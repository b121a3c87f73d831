// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `rules`: Conflict-checked rule inserts and deletes
//! - `config`: Config updates and database reset

pub mod config;
pub mod rules;

pub use config::{reset_database, update_config};
pub use rules::{delete_rule, insert_sleep_rule, insert_wake_rule};
