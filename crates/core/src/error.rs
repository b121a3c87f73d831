// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gawake_domain::{DomainError, RuleId, RuleKind};

/// Errors that can occur while resolving, matching or storing rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No enabled rule of the requested kind is active on any weekday.
    NoRuleScheduled,
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The rule to delete does not exist.
    RuleNotFound {
        /// The table that was searched.
        kind: RuleKind,
        /// The missing identifier.
        rule_id: RuleId,
    },
    /// The backing store failed.
    Store(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuleScheduled => write!(f, "No rule scheduled"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RuleNotFound { kind, rule_id } => {
                write!(f, "No {kind} rule with id {rule_id}")
            }
            Self::Store(msg) => write!(f, "Store error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
