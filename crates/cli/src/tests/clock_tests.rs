// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::SystemClock;
use chrono::NaiveDate;
use gawake::Clock;
use gawake_domain::Weekday;
use time::macros::date;

#[test]
fn test_from_naive_converts_every_field() {
    let naive = NaiveDate::from_ymd_opt(2028, 2, 29)
        .unwrap()
        .and_hms_opt(23, 59, 58)
        .unwrap();

    let clock: SystemClock = SystemClock::from_naive(naive).unwrap();

    assert_eq!(clock.current_date(), date!(2028 - 02 - 29));
    assert_eq!(clock.current_weekday(), Weekday::Tuesday);
    assert_eq!(clock.current_time_of_day().hhmmss(), 235_958);
}

#[test]
fn test_system_clock_reads_both_time_bases() {
    assert!(SystemClock::now(true).is_ok());
    assert!(SystemClock::now(false).is_ok());
}
