// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command handlers.
//!
//! Handlers write their output to a caller-supplied writer and run
//! processes through a [`ProcessRunner`], so tests can drive them against an
//! in-memory database without touching the machine.

use crate::cli::{
    AddSleepArgs, AddWakeArgs, Command, ConfigCommand, ConfigSetArgs, RulesCommand, ScheduleArgs,
    TickArgs,
};
use crate::runner::{ExitReport, ProcessRunner, SHUTDOWN_ARGS, SHUTDOWN_PROGRAM};
use color_eyre::eyre::{Result, bail, eyre};
use gawake::{
    Clock, CoreError, InvocationDescriptor, RuleStore, TickDecision, WakeTickDecision,
    add_sleep_rule, add_wake_rule, build_manual_invocation, delete_rule, handle_tick,
    handle_wake_tick, schedule_next_wake,
};
use gawake_domain::{
    CanonicalTime, GawakeConfig, PowerMode, RuleId, RuleKind, ScheduledRule, SleepRule, SleepTime,
    WakeRule, WakeTime,
};
use gawake_persistence::Persistence;
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

/// Runs one parsed command.
///
/// # Errors
///
/// Returns an error if the command fails or its output cannot be written.
pub fn run(
    command: &Command,
    store: &mut Persistence,
    clock: &dyn Clock,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Rules(rules) => run_rules(rules, store, out),
        Command::Schedule(args) => run_schedule(args, store, clock, runner, out),
        Command::Tick(args) => run_tick(args, store, clock, runner, out),
        Command::Boot(args) => run_boot(args, store, clock, runner, out),
        Command::Config(config) => run_config(config, store, out),
        Command::Reset { yes } => run_reset(*yes, store, out),
    }
}

fn run_rules(command: &RulesCommand, store: &mut Persistence, out: &mut dyn Write) -> Result<()> {
    match command {
        RulesCommand::List { kind, json } => list_rules(*kind, *json, store, out),
        RulesCommand::AddWake(args) => {
            let rule_id: RuleId = add_wake(args, store)?;
            writeln!(out, "Added wake rule {rule_id}")?;
            Ok(())
        }
        RulesCommand::AddSleep(args) => {
            let rule_id: RuleId = add_sleep(args, store)?;
            writeln!(out, "Added sleep rule {rule_id}")?;
            Ok(())
        }
        RulesCommand::Delete { kind, id } => {
            delete_rule(store, *kind, *id)?;
            writeln!(out, "Deleted {kind} rule {id}")?;
            Ok(())
        }
    }
}

/// Stores a new wake rule; the mode falls back to the configured default.
fn add_wake(args: &AddWakeArgs, store: &mut Persistence) -> Result<RuleId> {
    let mode: PowerMode = match args.mode {
        Some(mode) => mode,
        None => store.get_config()?.default_mode,
    };
    let rule: WakeRule = WakeRule::new(
        &args.name,
        WakeTime::parse(&args.time)?,
        args.days,
        args.command.as_deref(),
        mode,
    )
    .with_enabled(!args.disabled);

    Ok(add_wake_rule(store, rule)?)
}

fn add_sleep(args: &AddSleepArgs, store: &mut Persistence) -> Result<RuleId> {
    let rule: SleepRule = SleepRule::new(&args.name, SleepTime::parse(&args.time)?, args.days)
        .with_enabled(!args.disabled);

    Ok(add_sleep_rule(store, rule)?)
}

#[derive(Serialize)]
struct RuleListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    wake: Option<Vec<WakeRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sleep: Option<Vec<SleepRule>>,
}

fn list_rules(
    kind: Option<RuleKind>,
    json: bool,
    store: &mut Persistence,
    out: &mut dyn Write,
) -> Result<()> {
    let wake: Option<Vec<WakeRule>> = match kind {
        None | Some(RuleKind::Wake) => Some(store.list_wake_rules()?),
        Some(RuleKind::Sleep) => None,
    };
    let sleep: Option<Vec<SleepRule>> = match kind {
        None | Some(RuleKind::Sleep) => Some(store.list_sleep_rules()?),
        Some(RuleKind::Wake) => None,
    };

    if json {
        let listing: RuleListing = RuleListing { wake, sleep };
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    if let Some(rules) = wake {
        writeln!(out, "Wake rules:")?;
        writeln!(
            out,
            "{:>4}  {:<32}  {:<6}  {:<7}  {:<7}  {:<3}  COMMAND",
            "ID", "NAME", "TIME", "DAYS", "MODE", "ON"
        )?;
        for rule in &rules {
            writeln!(
                out,
                "{:>4}  {:<32}  {:<6}  {:<7}  {:<7}  {:<3}  {}",
                display_id(rule),
                rule.name(),
                rule.time().as_str(),
                rule.weekdays().to_string(),
                rule.mode().as_str(),
                yes_no(rule.is_enabled()),
                rule.command().unwrap_or("-")
            )?;
        }
    }

    if let Some(rules) = sleep {
        writeln!(out, "Sleep rules:")?;
        writeln!(
            out,
            "{:>4}  {:<32}  {:<6}  {:<7}  {:<3}",
            "ID", "NAME", "TIME", "DAYS", "ON"
        )?;
        for rule in &rules {
            writeln!(
                out,
                "{:>4}  {:<32}  {:<6}  {:<7}  {:<3}",
                display_id(rule),
                rule.name(),
                rule.time().as_str(),
                rule.weekdays().to_string(),
                yes_no(rule.is_enabled())
            )?;
        }
    }

    Ok(())
}

fn display_id<R: ScheduledRule>(rule: &R) -> String {
    rule.rule_id()
        .map_or_else(|| String::from("-"), |id| id.to_string())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn run_schedule(
    args: &ScheduleArgs,
    store: &mut Persistence,
    clock: &dyn Clock,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<()> {
    let config: GawakeConfig = store.get_config()?;

    let invocation: InvocationDescriptor = if let Some(at) = &args.at {
        let mode: PowerMode = args.mode.unwrap_or(config.default_mode);
        build_manual_invocation(at, mode, &config.rtcwake_options)?
    } else {
        match schedule_next_wake(store, clock, &config) {
            Ok(invocation) => invocation,
            Err(CoreError::NoRuleScheduled) => {
                warn!("No wake rule is scheduled; not suspending");
                writeln!(out, "No wake rule scheduled")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    };

    info!(timestamp = %invocation.timestamp_text(), mode = %invocation.mode(), "Scheduling wake");
    dispatch(&invocation, args.dry_run, runner, out)
}

fn run_tick(
    args: &TickArgs,
    store: &mut Persistence,
    clock: &dyn Clock,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<()> {
    let config: GawakeConfig = store.get_config()?;

    match handle_tick(store, clock, &config) {
        Ok(TickDecision::Disabled | TickDecision::Idle) => Ok(()),
        Ok(TickDecision::Suspend {
            sleep_rule,
            invocation,
        }) => {
            info!(
                sleep_rule = sleep_rule.name(),
                timestamp = %invocation.timestamp_text(),
                "Suspending until next wake"
            );
            dispatch(&invocation, args.dry_run, runner, out)
        }
        Ok(TickDecision::PowerOff { sleep_rule }) => {
            warn!(
                sleep_rule = sleep_rule.name(),
                "No wake rule scheduled; powering off without an alarm"
            );
            power_off(args.dry_run, runner, out)
        }
        Err(CoreError::NoRuleScheduled) => {
            warn!("Sleep rule matched but no wake rule is scheduled; not suspending");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn power_off(dry_run: bool, runner: &mut dyn ProcessRunner, out: &mut dyn Write) -> Result<()> {
    if dry_run {
        writeln!(out, "{SHUTDOWN_PROGRAM} {}", SHUTDOWN_ARGS.join(" "))?;
        return Ok(());
    }

    let report: ExitReport = runner
        .power_off()
        .map_err(|e| eyre!("could not start {SHUTDOWN_PROGRAM}: {e}"))?;
    if !report.success {
        bail!("{} exited with status {}", report.program, status_text(&report));
    }
    Ok(())
}

/// Runs the command of the wake rule the machine just woke for.
///
/// A failing command is logged; the boot tick itself still succeeds.
fn run_boot(
    args: &TickArgs,
    store: &mut Persistence,
    clock: &dyn Clock,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<()> {
    let config: GawakeConfig = store.get_config()?;

    let (rule, command) = match handle_wake_tick(store, clock, &config)? {
        WakeTickDecision::Disabled | WakeTickDecision::Idle => return Ok(()),
        WakeTickDecision::RunCommand { rule, command } => (rule, command),
    };

    if args.dry_run {
        writeln!(out, "{command}")?;
        return Ok(());
    }

    info!(rule = rule.name(), command = %command, "Running wake rule command");
    match runner.run_rule_command(&command) {
        Ok(report) if !report.success => {
            warn!(command = %command, code = ?report.code, "Wake rule command failed");
        }
        Ok(_) => {}
        Err(e) => warn!(command = %command, "Could not start wake rule command: {e}"),
    }
    Ok(())
}

/// Runs the pre-command, then arms the wake alarm.
///
/// A failing pre-command is logged and arming goes ahead. A failing
/// `rtcwake` is an error.
fn dispatch(
    invocation: &InvocationDescriptor,
    dry_run: bool,
    runner: &mut dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<()> {
    if dry_run {
        if let Some(command) = invocation.pre_command() {
            writeln!(out, "pre-command: {command}")?;
        }
        writeln!(out, "{invocation}")?;
        return Ok(());
    }

    if let Some(command) = invocation.pre_command() {
        match runner.run_rule_command(command) {
            Ok(report) if !report.success => {
                warn!(command, code = ?report.code, "Pre-command failed, arming anyway");
            }
            Ok(_) => {}
            Err(e) => warn!(command, "Could not start pre-command, arming anyway: {e}"),
        }
    }

    let report: ExitReport = runner
        .arm_wake(invocation)
        .map_err(|e| eyre!("could not start rtcwake: {e}"))?;
    if !report.success {
        bail!("{} exited with status {}", report.program, status_text(&report));
    }

    Ok(())
}

fn status_text(report: &ExitReport) -> String {
    report
        .code
        .map_or_else(|| String::from("unknown"), |code| code.to_string())
}

fn run_config(command: &ConfigCommand, store: &mut Persistence, out: &mut dyn Write) -> Result<()> {
    match command {
        ConfigCommand::Show { json } => {
            let config: GawakeConfig = store.get_config()?;
            write_config(&config, *json, out)
        }
        ConfigCommand::Set(args) => {
            let config: GawakeConfig = apply_config_changes(store.get_config()?, args);
            store.update_config(&config)?;
            write_config(&config, false, out)
        }
    }
}

/// Overlays the flags that were given onto `config`.
fn apply_config_changes(mut config: GawakeConfig, args: &ConfigSetArgs) -> GawakeConfig {
    if let Some(enabled) = args.enabled {
        config.enabled = enabled;
    }
    if let Some(commands) = args.commands {
        config.commands_enabled = commands;
    }
    if let Some(localtime) = args.localtime {
        config.use_localtime = localtime;
    }
    if let Some(options) = &args.options {
        config.rtcwake_options = options.trim().to_string();
    }
    if let Some(mode) = args.default_mode {
        config.default_mode = mode;
    }
    if let Some(seconds) = args.boot_time {
        config.boot_time_seconds = seconds;
    }
    if let Some(shutdown) = args.shutdown_on_failure {
        config.shutdown_on_failure = shutdown;
    }
    config
}

fn write_config(config: &GawakeConfig, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    } else {
        writeln!(out, "enabled:          {}", config.enabled)?;
        writeln!(out, "commands_enabled: {}", config.commands_enabled)?;
        writeln!(out, "use_localtime:    {}", config.use_localtime)?;
        writeln!(out, "rtcwake_options:  {}", config.rtcwake_options)?;
        writeln!(out, "default_mode:     {}", config.default_mode)?;
        writeln!(out, "boot_time:        {}s", config.boot_time_seconds)?;
        writeln!(out, "shutdown_on_fail: {}", config.shutdown_on_failure)?;
    }
    Ok(())
}

fn run_reset(yes: bool, store: &mut Persistence, out: &mut dyn Write) -> Result<()> {
    if !yes {
        bail!("refusing to reset without --yes");
    }
    store.reset_database()?;
    warn!("Deleted every rule and restored the default configuration");
    writeln!(out, "Database reset")?;
    Ok(())
}
