// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The core scheduler driven through the `SQLite` store.

use crate::Persistence;
use crate::tests::{create_test_sleep_rule, create_test_wake_rule};
use gawake::{
    FixedClock, InvocationDescriptor, TickDecision, add_sleep_rule, add_wake_rule, handle_tick,
    schedule_next_wake,
};
use gawake_domain::GawakeConfig;
use time::{Date, Month, PrimitiveDateTime, Time};

fn create_clock(day: u8, hour: u8, minute: u8) -> FixedClock {
    FixedClock::new(PrimitiveDateTime::new(
        Date::from_calendar_date(2026, Month::December, day).unwrap(),
        Time::from_hms(hour, minute, 0).unwrap(),
    ))
}

#[test]
fn test_schedule_next_wake_rolls_into_next_year() {
    let mut db: Persistence = Persistence::new_in_memory().unwrap();
    // 2026-12-31 is a Thursday; the only rule is on Friday.
    add_wake_rule(&mut db, create_test_wake_rule("Friday", "061500", "0000010")).unwrap();
    let config: GawakeConfig = db.get_config().unwrap();

    let invocation: InvocationDescriptor =
        schedule_next_wake(&mut db, &create_clock(31, 23, 0), &config).unwrap();

    assert_eq!(invocation.timestamp_text(), "20270101061500");
    assert_eq!(
        invocation.rtcwake_args(),
        vec!["--date", "20270101061500", "-a", "-m", "off"]
    );
}

#[test]
fn test_handle_tick_suspends_from_stored_rules() {
    let mut db: Persistence = Persistence::new_in_memory().unwrap();
    add_sleep_rule(&mut db, create_test_sleep_rule("Night", "2300", "1111111")).unwrap();
    add_wake_rule(&mut db, create_test_wake_rule("Morning", "070000", "1111111")).unwrap();
    let config: GawakeConfig = db.get_config().unwrap();

    let decision: TickDecision = handle_tick(&mut db, &create_clock(14, 23, 3), &config).unwrap();

    match decision {
        TickDecision::Suspend {
            sleep_rule,
            invocation,
        } => {
            assert_eq!(sleep_rule.name(), "Night");
            assert_eq!(invocation.timestamp_text(), "20261215070000");
        }
        other => panic!("expected suspend, got {other:?}"),
    }
}
