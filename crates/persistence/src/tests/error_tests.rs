// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use gawake::CoreError;
use gawake_domain::{DomainError, RuleKind};

#[test]
fn test_diesel_not_found_is_a_database_error() {
    let error: PersistenceError = PersistenceError::from(diesel::result::Error::NotFound);

    assert!(matches!(error, PersistenceError::DatabaseError(_)));
}

#[test]
fn test_core_error_keeps_domain_and_missing_rule_variants() {
    let domain: CoreError = CoreError::from(PersistenceError::DomainViolation(
        DomainError::InvalidBootTime(String::from("too long")),
    ));
    assert!(matches!(
        domain,
        CoreError::DomainViolation(DomainError::InvalidBootTime(_))
    ));

    let missing: CoreError = CoreError::from(PersistenceError::RuleNotFound {
        kind: RuleKind::Wake,
        rule_id: 9,
    });
    assert_eq!(
        missing,
        CoreError::RuleNotFound {
            kind: RuleKind::Wake,
            rule_id: 9
        }
    );

    let store: CoreError = CoreError::from(PersistenceError::QueryFailed(String::from("locked")));
    assert!(matches!(store, CoreError::Store(_)));
}
