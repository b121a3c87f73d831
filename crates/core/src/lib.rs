// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod clock;
mod dispatch;
mod error;
mod resolver;
mod scheduler;
mod store;
mod tick;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, FixedClock, add_days};
pub use dispatch::{
    InvocationDescriptor, TIMESTAMP_LENGTH, build_invocation, build_invocation_on,
    build_manual_invocation, parse_timestamp,
};
pub use error::CoreError;
pub use resolver::{Occurrence, find_next_occurrence};
pub use scheduler::{
    TickDecision, WakeTickDecision, add_sleep_rule, add_wake_rule, delete_rule, handle_tick,
    handle_wake_tick, schedule_next_wake,
};
pub use store::{MemoryRuleStore, RuleStore};
pub use tick::{TICK_TOLERANCE_MINUTES, TickMatch, WakeTickMatch, on_tick, on_wake_tick};
