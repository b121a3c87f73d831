// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_wake_rule;
use crate::{Persistence, PersistenceError};
use gawake::RuleStore;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = Persistence::new_in_memory().unwrap();
    let mut db2: Persistence = Persistence::new_in_memory().unwrap();

    db1.insert_wake_rule(create_test_wake_rule("Morning", "070000", "1111111"))
        .unwrap();

    assert_eq!(db1.list_wake_rules().unwrap().len(), 1);
    assert_eq!(db2.list_wake_rules().unwrap().len(), 0, "db2 should be isolated");
}

#[test]
fn test_file_database_persists_between_opens() {
    let path: std::path::PathBuf = std::env::temp_dir().join(format!(
        "gawake_persistence_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut db: Persistence = Persistence::new_with_file(&path).unwrap();
        db.insert_wake_rule(create_test_wake_rule("Morning", "070000", "0111110"))
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let rules = reopened.list_wake_rules().unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].name(), "Morning");

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
