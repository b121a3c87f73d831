// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `rules`: Wake and sleep rule listings
//! - `config`: The global configuration row

pub mod config;
pub mod rules;

pub use config::get_config;
pub use rules::{list_sleep_rules, list_wake_rules};
