use std::sync::Arc;

use chainsim_model::{ModelError, StateCode, StateRegistry, TransitionTable};

/// Registry with a mix of explicit and auto-assigned codes.
fn mixed_registry() -> StateRegistry {
    let mut reg = StateRegistry::new();
    reg.add_with_code("healthy", 10).unwrap();
    reg.add("warming").unwrap();
    reg.add_with_code("hot", 1).unwrap();
    reg.add("critical").unwrap();
    reg.add("failed").unwrap();
    reg
}

// ---------------------------------------------------------------------------
// 1. registry_bijection
// ---------------------------------------------------------------------------
#[test]
fn registry_bijection() {
    let reg = mixed_registry();

    for id in reg.ids() {
        let code = reg.code_of(id).unwrap();
        assert_eq!(reg.id_of(code).unwrap(), id, "id -> code -> id for {id}");
    }
    for code in reg.codes() {
        let id = reg.id_of(code).unwrap();
        assert_eq!(reg.code_of(id).unwrap(), code, "code -> id -> code for {code}");
    }
    assert_eq!(reg.ids().count(), reg.codes().count());
}

// ---------------------------------------------------------------------------
// 2. auto_assignment_sequence
// ---------------------------------------------------------------------------
#[test]
fn auto_assignment_sequence() {
    let reg = mixed_registry();
    // healthy=10, warming=0, hot=1, critical=2, failed=3
    assert_eq!(reg.code_of("warming").unwrap(), StateCode::new(0));
    assert_eq!(reg.code_of("critical").unwrap(), StateCode::new(2));
    assert_eq!(reg.code_of("failed").unwrap(), StateCode::new(3));
}

// ---------------------------------------------------------------------------
// 3. failed_adds_leave_registry_untouched
// ---------------------------------------------------------------------------
#[test]
fn failed_adds_leave_registry_untouched() {
    let mut reg = mixed_registry();
    let before: Vec<String> = reg.ids().map(str::to_string).collect();

    assert!(reg.add("hot").is_err());
    assert!(reg.add_with_code("new", 10).is_err());
    assert!(reg.add_with_code("new", -3).is_err());

    let after: Vec<String> = reg.ids().map(str::to_string).collect();
    assert_eq!(before, after);
    assert!(!reg.contains("new"));
}

// ---------------------------------------------------------------------------
// 4. duplicate_then_modify
// ---------------------------------------------------------------------------
#[test]
fn duplicate_then_modify() {
    let reg = Arc::new(mixed_registry());
    let mut table = TransitionTable::new(Arc::clone(&reg)).unwrap();
    table.add("healthy", "warming", 0.2).unwrap();
    table.add("healthy", "hot", 1.0).unwrap();

    assert_eq!(
        table.add("healthy", "hot", 2.0),
        Err(ModelError::DuplicateTransition {
            origin: "healthy".into(),
            destination: "hot".into()
        })
    );

    table.modify("healthy", "hot", 2.0).unwrap();
    let list = table.transitions_from(StateCode::new(10)).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].destination(), reg.code_of("hot").unwrap());
    assert_eq!(list[1].rate(), 2.0);
}

// ---------------------------------------------------------------------------
// 5. self_loops_always_rejected
// ---------------------------------------------------------------------------
#[test]
fn self_loops_always_rejected() {
    let reg = Arc::new(mixed_registry());
    let mut table = TransitionTable::new(Arc::clone(&reg)).unwrap();
    for id in reg.ids() {
        assert_eq!(
            table.add(id, id, 1.0),
            Err(ModelError::SelfLoop { id: id.to_string() })
        );
    }
    assert!(table.is_empty());
}

// ---------------------------------------------------------------------------
// 6. absorbing_states
// ---------------------------------------------------------------------------
#[test]
fn absorbing_states() {
    let reg = Arc::new(mixed_registry());
    let mut table = TransitionTable::new(Arc::clone(&reg)).unwrap();
    table.add("healthy", "warming", 0.2).unwrap();
    table.add("warming", "hot", 0.2).unwrap();
    table.add("hot", "critical", 0.2).unwrap();
    table.add("critical", "failed", 0.2).unwrap();
    table.add("critical", "hot", 0.8).unwrap();

    let failed = reg.code_of("failed").unwrap();
    assert_eq!(table.absorbing_codes(), vec![failed]);
    assert!(table.is_absorbing(failed));
    assert!(!table.is_absorbing(reg.code_of("critical").unwrap()));
}
