// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DEFAULT_BOOT_TIME_SECONDS, DEFAULT_RTCWAKE_OPTIONS, DomainError, GawakeConfig,
    MAX_BOOT_TIME_SECONDS, PowerMode, validate_boot_time, validate_rtcwake_options,
};

#[test]
fn test_default_config() {
    let config: GawakeConfig = GawakeConfig::default();
    assert!(config.enabled);
    assert!(!config.commands_enabled);
    assert!(config.use_localtime);
    assert_eq!(config.rtcwake_options, DEFAULT_RTCWAKE_OPTIONS);
    assert_eq!(config.default_mode, PowerMode::Off);
    assert_eq!(config.boot_time_seconds, DEFAULT_BOOT_TIME_SECONDS);
    assert!(!config.shutdown_on_failure);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_boot_time_bounds() {
    assert!(validate_boot_time(0).is_ok());
    assert!(validate_boot_time(MAX_BOOT_TIME_SECONDS).is_ok());
    assert!(matches!(
        validate_boot_time(MAX_BOOT_TIME_SECONDS + 1),
        Err(DomainError::InvalidBootTime(_))
    ));
}

#[test]
fn test_validate_config_checks_options_and_boot_time() {
    let bad_options: GawakeConfig = GawakeConfig {
        rtcwake_options: String::from("--date 1"),
        ..GawakeConfig::default()
    };
    assert!(matches!(
        bad_options.validate(),
        Err(DomainError::InvalidRtcwakeOptions(_))
    ));

    let bad_boot_time: GawakeConfig = GawakeConfig {
        boot_time_seconds: 7200,
        ..GawakeConfig::default()
    };
    assert!(matches!(
        bad_boot_time.validate(),
        Err(DomainError::InvalidBootTime(_))
    ));
}

#[test]
fn test_validate_rtcwake_options_accepts_pass_through_flags() {
    assert!(validate_rtcwake_options("-a -v").is_ok());
    assert!(validate_rtcwake_options("").is_ok());
    assert!(validate_rtcwake_options("--device rtc1").is_ok());
}

#[test]
fn test_validate_rtcwake_options_rejects_reserved_flags() {
    for options in ["-a --date 20260101000000", "-m mem", "--mode=off", "-t 1700000000"] {
        let result: Result<(), DomainError> = validate_rtcwake_options(options);
        assert!(
            matches!(result, Err(DomainError::InvalidRtcwakeOptions(_))),
            "{options} should be rejected"
        );
    }
}
