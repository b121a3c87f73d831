// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cli::{Args, Command, ConfigCommand, DEFAULT_DATABASE_PATH, RulesCommand};
use clap::Parser;
use gawake_domain::{PowerMode, RuleKind, Weekday};
use std::path::PathBuf;

#[test]
fn test_add_wake_accepts_day_names() {
    let args: Args = Args::try_parse_from([
        "gawake", "rules", "add-wake", "--name", "Work", "--time", "063000", "--days",
        "mon,tue,wed", "--mode", "mem",
    ])
    .unwrap();

    let Command::Rules(RulesCommand::AddWake(add)) = args.command else {
        panic!("expected rules add-wake");
    };
    assert_eq!(add.name, "Work");
    assert_eq!(add.time, "063000");
    assert!(add.days.is_active(Weekday::Monday));
    assert!(add.days.is_active(Weekday::Wednesday));
    assert!(!add.days.is_active(Weekday::Sunday));
    assert_eq!(add.mode, Some(PowerMode::Mem));
    assert!(!add.disabled);
}

#[test]
fn test_invalid_mask_is_rejected_by_parser() {
    let result = Args::try_parse_from([
        "gawake", "rules", "add-sleep", "--name", "Night", "--time", "2300", "--days", "0111",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_invalid_mode_is_rejected_by_parser() {
    let result = Args::try_parse_from([
        "gawake", "schedule", "--at", "20260301070000", "--mode", "hibernate",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_schedule_mode_requires_at() {
    let result = Args::try_parse_from(["gawake", "schedule", "--mode", "mem"]);

    assert!(result.is_err());
}

#[test]
fn test_delete_accepts_kind_aliases() {
    let args: Args =
        Args::try_parse_from(["gawake", "rules", "delete", "--kind", "turnoff", "--id", "4"])
            .unwrap();

    assert!(matches!(
        args.command,
        Command::Rules(RulesCommand::Delete {
            kind: RuleKind::Sleep,
            id: 4
        })
    ));
}

#[test]
fn test_config_set_parses_boolish_values() {
    let args: Args = Args::try_parse_from([
        "gawake", "config", "set", "--enabled", "no", "--commands", "yes", "--options=-a -u",
    ])
    .unwrap();

    let Command::Config(ConfigCommand::Set(set)) = args.command else {
        panic!("expected config set");
    };
    assert_eq!(set.enabled, Some(false));
    assert_eq!(set.commands, Some(true));
    assert_eq!(set.localtime, None);
    assert_eq!(set.options.as_deref(), Some("-a -u"));
}

#[test]
fn test_database_flag_overrides_default() {
    let args: Args = Args::try_parse_from(["gawake", "-d", "/tmp/g.db", "tick"]).unwrap();
    assert_eq!(args.database, PathBuf::from("/tmp/g.db"));

    let args: Args = Args::try_parse_from(["gawake", "--database", "rules.db", "tick"]).unwrap();
    assert_eq!(args.database, PathBuf::from("rules.db"));
}

#[test]
fn test_database_defaults_to_system_path() {
    if std::env::var_os("GAWAKE_DATABASE").is_some() {
        return;
    }
    let args: Args = Args::try_parse_from(["gawake", "tick"]).unwrap();
    assert_eq!(args.database, PathBuf::from(DEFAULT_DATABASE_PATH));
}

#[test]
fn test_boot_accepts_wake_tick_alias() {
    let args: Args = Args::try_parse_from(["gawake", "wake-tick", "--dry-run"]).unwrap();
    let Command::Boot(boot) = args.command else {
        panic!("expected boot");
    };
    assert!(boot.dry_run);

    let args: Args = Args::try_parse_from(["gawake", "boot"]).unwrap();
    assert!(matches!(args.command, Command::Boot(ref boot) if !boot.dry_run));
}

#[test]
fn test_config_set_parses_boot_time_and_shutdown() {
    let args: Args = Args::try_parse_from([
        "gawake", "config", "set", "--boot-time", "120", "--shutdown-on-failure", "on",
    ])
    .unwrap();

    let Command::Config(ConfigCommand::Set(set)) = args.command else {
        panic!("expected config set");
    };
    assert_eq!(set.boot_time, Some(120));
    assert_eq!(set.shutdown_on_failure, Some(true));
}
