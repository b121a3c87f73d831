// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::FixedClock;
use gawake_domain::{PowerMode, SleepRule, SleepTime, WakeRule, WakeTime, Weekday, WeekdayMask};
use time::{Date, Month, PrimitiveDateTime, Time};

pub fn create_test_wake_rule(name: &str, time: &str, days: &[Weekday]) -> WakeRule {
    WakeRule::new(
        name,
        WakeTime::parse(time).unwrap(),
        WeekdayMask::from_days(days),
        None,
        PowerMode::Off,
    )
}

pub fn create_test_sleep_rule(name: &str, time: &str, days: &[Weekday]) -> SleepRule {
    SleepRule::new(name, SleepTime::parse(time).unwrap(), WeekdayMask::from_days(days))
}

/// Builds a datetime from calendar fields.
pub fn datetime(
    year: i32,
    month: Month,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> PrimitiveDateTime {
    PrimitiveDateTime::new(
        Date::from_calendar_date(year, month, day).unwrap(),
        Time::from_hms(hour, minute, second).unwrap(),
    )
}

/// A clock on Monday 2026-01-05 at the given time.
pub fn create_monday_clock(hour: u8, minute: u8, second: u8) -> FixedClock {
    FixedClock::new(datetime(2026, Month::January, 5, hour, minute, second))
}
