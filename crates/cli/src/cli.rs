// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use gawake_domain::{PowerMode, RuleId, RuleKind, WeekdayMask};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Where the rule database lives unless overridden.
pub const DEFAULT_DATABASE_PATH: &str = "/var/lib/gawake/gawake.db";

/// Gawake - schedule suspend and wake-up with rtcwake
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file.
    #[arg(short, long, env = "GAWAKE_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Manage wake and sleep rules
    #[command(subcommand)]
    Rules(RulesCommand),

    /// Arm the next wake and suspend now
    #[command(visible_alias = "s")]
    Schedule(ScheduleArgs),

    /// Check the sleep rules; run this every minute from cron or a timer
    #[command(visible_alias = "t")]
    Tick(TickArgs),

    /// Run the command of the wake rule the machine just woke for; run this
    /// at boot
    #[command(visible_alias = "wake-tick")]
    Boot(TickArgs),

    /// Show or change the global configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Delete every rule and restore the default configuration
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum RulesCommand {
    /// List rules
    #[command(visible_alias = "ls")]
    List {
        /// Only list this kind of rule
        #[arg(long)]
        kind: Option<RuleKind>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a wake rule
    AddWake(AddWakeArgs),

    /// Add a sleep rule
    AddSleep(AddSleepArgs),

    /// Delete a rule
    #[command(visible_alias = "rm")]
    Delete {
        /// Which table the rule is in
        #[arg(long)]
        kind: RuleKind,

        /// The rule id, as shown by `rules list`
        #[arg(long)]
        id: RuleId,
    },
}

#[derive(Clone, Debug, ClapArgs)]
pub struct AddWakeArgs {
    /// Rule name, up to 32 characters
    #[arg(long)]
    pub name: String,

    /// Wake time as HHMMSS
    #[arg(long)]
    pub time: String,

    /// Weekdays, as seven 0/1 digits from Sunday (0111110) or names (mon,wed,fri)
    #[arg(long)]
    pub days: WeekdayMask,

    /// Power mode to suspend into; defaults to the configured default mode
    #[arg(long)]
    pub mode: Option<PowerMode>,

    /// Command to run before suspending, up to 128 characters
    #[arg(long)]
    pub command: Option<String>,

    /// Store the rule without scheduling it
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Clone, Debug, ClapArgs)]
pub struct AddSleepArgs {
    /// Rule name, up to 32 characters
    #[arg(long)]
    pub name: String,

    /// Sleep time as HHMM; minutes must be 00, 15, 30 or 45
    #[arg(long)]
    pub time: String,

    /// Weekdays, as seven 0/1 digits from Sunday (0111110) or names (mon,wed,fri)
    #[arg(long)]
    pub days: WeekdayMask,

    /// Store the rule without scheduling it
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Clone, Debug, ClapArgs)]
pub struct ScheduleArgs {
    /// Wake at this moment (YYYYMMDDhhmmss) instead of the next wake rule
    #[arg(long)]
    pub at: Option<String>,

    /// Power mode for `--at`; defaults to the configured default mode
    #[arg(long, requires = "at")]
    pub mode: Option<PowerMode>,

    /// Print the rtcwake invocation without running anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, ClapArgs)]
pub struct TickArgs {
    /// Print what would run without running anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Change configuration values
    Set(ConfigSetArgs),
}

#[derive(Clone, Debug, Default, ClapArgs)]
pub struct ConfigSetArgs {
    /// Whether ticks may suspend the machine
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub enabled: Option<bool>,

    /// Whether rule pre-commands are run
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub commands: Option<bool>,

    /// Read the clock in local time (true) or UTC (false)
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub localtime: Option<bool>,

    /// Extra rtcwake options; must not contain --date or -m
    #[arg(long, allow_hyphen_values = true)]
    pub options: Option<String>,

    /// Mode used by `schedule --at` when none is given
    #[arg(long)]
    pub default_mode: Option<PowerMode>,

    /// Seconds after a wake rule's time during which `boot` still runs its
    /// command (at most 3600)
    #[arg(long)]
    pub boot_time: Option<u16>,

    /// Power off without an alarm when a sleep rule matches but no wake
    /// rule exists
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub shutdown_on_failure: Option<bool>,
}
