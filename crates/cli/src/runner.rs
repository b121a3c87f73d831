// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Process execution for pre-commands and `rtcwake`.

use gawake::InvocationDescriptor;
use std::io;
use std::process::Output;
use tracing::{debug, info};

/// Program used to arm the RTC alarm.
pub const RTCWAKE_PROGRAM: &str = "rtcwake";

/// Program used to power off when no wake can be armed.
pub const SHUTDOWN_PROGRAM: &str = "shutdown";

/// Arguments passed to `SHUTDOWN_PROGRAM`.
pub const SHUTDOWN_ARGS: [&str; 2] = ["--poweroff", "now"];

/// The captured result of one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReport {
    /// What was run, for log lines.
    pub program: String,
    /// The exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Whether the process exited with status zero.
    pub success: bool,
}

impl ExitReport {
    fn from_output(program: &str, output: &Output) -> Self {
        Self {
            program: program.to_string(),
            code: output.status.code(),
            success: output.status.success(),
        }
    }
}

/// Runs the side effects of a wake dispatch.
pub trait ProcessRunner {
    /// Runs a rule's command through the shell, before suspending or after
    /// waking.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process could not be started.
    fn run_rule_command(&mut self, command: &str) -> io::Result<ExitReport>;

    /// Arms the wake alarm and suspends.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process could not be started.
    fn arm_wake(&mut self, invocation: &InvocationDescriptor) -> io::Result<ExitReport>;

    /// Powers the machine off without arming an alarm.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process could not be started.
    fn power_off(&mut self) -> io::Result<ExitReport>;
}

trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}

/// Runs real processes with `duct`.
#[derive(Debug, Clone)]
pub struct DuctRunner {
    rtcwake_program: String,
    shutdown_program: String,
}

impl Default for DuctRunner {
    fn default() -> Self {
        Self::new(RTCWAKE_PROGRAM)
    }
}

impl DuctRunner {
    /// Creates a runner that arms the alarm with `rtcwake_program`.
    #[must_use]
    pub fn new(rtcwake_program: &str) -> Self {
        Self {
            rtcwake_program: rtcwake_program.to_string(),
            shutdown_program: SHUTDOWN_PROGRAM.to_string(),
        }
    }

    /// Replaces the program used to power off.
    #[must_use]
    pub fn with_shutdown_program(mut self, shutdown_program: &str) -> Self {
        self.shutdown_program = shutdown_program.to_string();
        self
    }
}

impl ProcessRunner for DuctRunner {
    fn run_rule_command(&mut self, command: &str) -> io::Result<ExitReport> {
        let output: Output = duct::cmd!("sh", "-c", command)
            .unchecked()
            .run_with_trace()?;
        let report: ExitReport = ExitReport::from_output(command, &output);
        debug!(command, code = ?report.code, "Rule command finished");
        Ok(report)
    }

    fn arm_wake(&mut self, invocation: &InvocationDescriptor) -> io::Result<ExitReport> {
        let output: Output = duct::cmd(&self.rtcwake_program, invocation.rtcwake_args())
            .unchecked()
            .run_with_trace()?;
        let report: ExitReport = ExitReport::from_output(&self.rtcwake_program, &output);
        debug!(program = %self.rtcwake_program, code = ?report.code, "rtcwake finished");
        Ok(report)
    }

    fn power_off(&mut self) -> io::Result<ExitReport> {
        let output: Output = duct::cmd(&self.shutdown_program, SHUTDOWN_ARGS)
            .unchecked()
            .run_with_trace()?;
        let report: ExitReport = ExitReport::from_output(&self.shutdown_program, &output);
        debug!(program = %self.shutdown_program, code = ?report.code, "Power off finished");
        Ok(report)
    }
}
