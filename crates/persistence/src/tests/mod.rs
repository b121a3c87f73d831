// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error_tests;
mod initialization_tests;
mod scheduling_tests;

use gawake_domain::{PowerMode, SleepRule, SleepTime, WakeRule, WakeTime};

pub fn create_test_wake_rule(name: &str, time: &str, mask: &str) -> WakeRule {
    WakeRule::new(
        name,
        WakeTime::parse(time).unwrap(),
        mask.parse().unwrap(),
        None,
        PowerMode::Off,
    )
}

pub fn create_test_sleep_rule(name: &str, time: &str, mask: &str) -> SleepRule {
    SleepRule::new(name, SleepTime::parse(time).unwrap(), mask.parse().unwrap())
}
