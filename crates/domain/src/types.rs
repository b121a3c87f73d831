// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::canonical_time::{CanonicalTime, SleepTime, WakeTime};
use crate::error::DomainError;
use crate::weekday::WeekdayMask;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Store-assigned rule identifier.
pub type RuleId = i64;

/// The two rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Rules that end a suspend cycle.
    Wake,
    /// Rules that begin a suspend cycle.
    Sleep,
}

impl RuleKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wake => "wake",
            Self::Sleep => "sleep",
        }
    }
}

impl FromStr for RuleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wake" | "on" | "turnon" => Ok(Self::Wake),
            "sleep" | "off" | "turnoff" => Ok(Self::Sleep),
            _ => Err(DomainError::InvalidRuleKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Power state handed to `rtcwake -m`.
///
/// The resolver never interprets the mode; it is carried through to the
/// dispatch layer as an opaque tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PowerMode {
    Standby,
    Freeze,
    Mem,
    Disk,
    #[default]
    Off,
    No,
    On,
    Disable,
    Show,
}

impl PowerMode {
    /// Every recognised mode, in the order menus list them.
    pub const ALL: [Self; 9] = [
        Self::Off,
        Self::Disk,
        Self::Mem,
        Self::Standby,
        Self::Freeze,
        Self::No,
        Self::On,
        Self::Disable,
        Self::Show,
    ];

    /// Converts this mode to its `rtcwake` argument.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standby => "standby",
            Self::Freeze => "freeze",
            Self::Mem => "mem",
            Self::Disk => "disk",
            Self::Off => "off",
            Self::No => "no",
            Self::On => "on",
            Self::Disable => "disable",
            Self::Show => "show",
        }
    }
}

impl FromStr for PowerMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered: String = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lowered)
            .ok_or_else(|| DomainError::InvalidPowerMode(s.to_string()))
    }
}

impl std::fmt::Display for PowerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The view of a rule the resolver, tick matcher and conflict validator
/// operate on.
pub trait ScheduledRule {
    /// The canonical time type of this rule kind.
    type Time: CanonicalTime;

    /// Returns the store-assigned identifier, if persisted.
    fn rule_id(&self) -> Option<RuleId>;

    /// Returns the weekdays the rule fires on.
    fn weekdays(&self) -> &WeekdayMask;

    /// Returns the canonical time.
    fn time(&self) -> &Self::Time;

    /// Returns whether the rule takes part in scheduling.
    fn is_enabled(&self) -> bool;

    /// Returns the integer value of the canonical time.
    fn time_value(&self) -> u32 {
        self.time().value()
    }
}

/// A weekly rule describing when to resume power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeRule {
    /// The identifier assigned by the store.
    /// `None` indicates the rule has not been persisted yet.
    rule_id: Option<RuleId>,
    name: String,
    time: WakeTime,
    weekdays: WeekdayMask,
    /// Pre-command run before arming the wake timer. Never an empty string.
    command: Option<String>,
    mode: PowerMode,
    enabled: bool,
}

impl WakeRule {
    /// Creates a new, enabled `WakeRule` without a persisted ID.
    ///
    /// An empty or whitespace-only `command` is stored as `None`.
    #[must_use]
    pub fn new(
        name: &str,
        time: WakeTime,
        weekdays: WeekdayMask,
        command: Option<&str>,
        mode: PowerMode,
    ) -> Self {
        Self {
            rule_id: None,
            name: name.trim().to_string(),
            time,
            weekdays,
            command: command
                .map(str::trim)
                .filter(|cmd| !cmd.is_empty())
                .map(String::from),
            mode,
            enabled: true,
        }
    }

    /// Returns this rule carrying a persisted ID.
    #[must_use]
    pub fn with_id(mut self, rule_id: RuleId) -> Self {
        self.rule_id = Some(rule_id);
        self
    }

    /// Returns this rule with the given enabled flag.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pre-command, if any.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Returns the power mode.
    #[must_use]
    pub const fn mode(&self) -> PowerMode {
        self.mode
    }
}

impl ScheduledRule for WakeRule {
    type Time = WakeTime;

    fn rule_id(&self) -> Option<RuleId> {
        self.rule_id
    }

    fn weekdays(&self) -> &WeekdayMask {
        &self.weekdays
    }

    fn time(&self) -> &WakeTime {
        &self.time
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// A weekly rule describing when to begin a suspend cycle.
///
/// Sleep rules carry no mode or command; those belong to the wake rule
/// that ends the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepRule {
    rule_id: Option<RuleId>,
    name: String,
    time: SleepTime,
    weekdays: WeekdayMask,
    enabled: bool,
}

impl SleepRule {
    /// Creates a new, enabled `SleepRule` without a persisted ID.
    #[must_use]
    pub fn new(name: &str, time: SleepTime, weekdays: WeekdayMask) -> Self {
        Self {
            rule_id: None,
            name: name.trim().to_string(),
            time,
            weekdays,
            enabled: true,
        }
    }

    /// Returns this rule carrying a persisted ID.
    #[must_use]
    pub fn with_id(mut self, rule_id: RuleId) -> Self {
        self.rule_id = Some(rule_id);
        self
    }

    /// Returns this rule with the given enabled flag.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ScheduledRule for SleepRule {
    type Time = SleepTime;

    fn rule_id(&self) -> Option<RuleId> {
        self.rule_id
    }

    fn weekdays(&self) -> &WeekdayMask {
        &self.weekdays
    }

    fn time(&self) -> &SleepTime {
        &self.time
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
