// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod cli_tests;
mod clock_tests;

use crate::cli::Args;
use crate::commands;
use crate::runner::{ExitReport, ProcessRunner};
use clap::Parser;
use color_eyre::eyre::Result;
use gawake::{FixedClock, InvocationDescriptor};
use gawake_persistence::Persistence;
use std::io;
use time::macros::datetime;

/// Records what would have been run, in order.
pub struct RecordingRunner {
    pub calls: Vec<String>,
    pub pre_command_code: i32,
    pub rtcwake_code: i32,
}

impl RecordingRunner {
    pub const fn new() -> Self {
        Self {
            calls: Vec::new(),
            pre_command_code: 0,
            rtcwake_code: 0,
        }
    }

    fn report(program: &str, code: i32) -> ExitReport {
        ExitReport {
            program: program.to_string(),
            code: Some(code),
            success: code == 0,
        }
    }
}

impl ProcessRunner for RecordingRunner {
    fn run_rule_command(&mut self, command: &str) -> io::Result<ExitReport> {
        self.calls.push(format!("sh: {command}"));
        Ok(Self::report(command, self.pre_command_code))
    }

    fn arm_wake(&mut self, invocation: &InvocationDescriptor) -> io::Result<ExitReport> {
        self.calls.push(invocation.to_string());
        Ok(Self::report("rtcwake", self.rtcwake_code))
    }

    fn power_off(&mut self) -> io::Result<ExitReport> {
        self.calls.push(String::from("power off"));
        Ok(Self::report("shutdown", 0))
    }
}

pub fn create_test_store() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Monday 2026-01-05 at 23:02.
pub fn create_test_clock() -> FixedClock {
    FixedClock::new(datetime!(2026-01-05 23:02:00))
}

/// Parses `argv` (without the program name) and runs it, returning the
/// result and everything written to stdout.
pub fn run_command(
    argv: &[&str],
    store: &mut Persistence,
    clock: &FixedClock,
    runner: &mut RecordingRunner,
) -> (Result<()>, String) {
    let args: Args = Args::try_parse_from(std::iter::once("gawake").chain(argv.iter().copied()))
        .unwrap();
    let mut out: Vec<u8> = Vec::new();
    let result: Result<()> = commands::run(&args.command, store, clock, runner, &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Runs a command that must succeed and returns its output.
pub fn run_ok(
    argv: &[&str],
    store: &mut Persistence,
    clock: &FixedClock,
    runner: &mut RecordingRunner,
) -> String {
    let (result, output) = run_command(argv, store, clock, runner);
    result.unwrap();
    output
}
