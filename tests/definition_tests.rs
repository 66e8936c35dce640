//! Loading JSON definitions and exploring them end to end.

use gcmd::builder::{BuildError, DefinitionIssue, SystemDef};
use gcmd::explore::{Explorer, SearchOrder};

const MUTEX: &str = include_str!("../demos/mutex.json");

#[test]
fn mutex_definition_excludes_double_entry() {
    let def = SystemDef::from_json(MUTEX).unwrap();
    let config = def.config.clone();
    let system = def.build().unwrap();

    let mut processed = Vec::new();
    let graph = Explorer::new(&system)
        .with_config(config)
        .run_with(|state| processed.push(format!("Processing {state}")))
        .unwrap();

    assert_eq!(
        processed,
        vec![
            "Processing (False, False, False)",
            "Processing (True, True, False)",
            "Processing (True, False, True)",
        ]
    );

    let both = system
        .variables()
        .state([("lock", true), ("cs1", true), ("cs2", true)])
        .unwrap();
    assert!(!graph.contains(&both));
    assert!(graph.terminal_states().is_empty());
}

#[test]
fn mutex_config_is_loaded() {
    let def = SystemDef::from_json(MUTEX).unwrap();

    assert_eq!(def.config.order, SearchOrder::Bfs);
    assert_eq!(def.config.max_states, None);
}

#[test]
fn unresolved_names_are_reported_together() {
    let def = SystemDef::from_json(
        r#"{
            "variables": ["a"],
            "initial": { "q": true },
            "commands": [{ "name": "bad", "guard": { "x": true }, "actset": { "y": true } }]
        }"#,
    )
    .unwrap();

    match def.build() {
        Err(BuildError::Invalid(issues)) => {
            assert_eq!(issues.len(), 3);
            assert!(issues
                .iter()
                .all(|issue| matches!(issue, DefinitionIssue::UnknownVariable { .. })));
        }
        other => panic!("Expected Invalid, got {other:?}"),
    }
}

#[test]
fn default_system_processes_single_state() {
    let def = SystemDef::from_json(r#"{ "variables": ["a", "b", "c"] }"#).unwrap();
    let system = def.build().unwrap();

    let mut processed = Vec::new();
    Explorer::new(&system)
        .run_with(|state| processed.push(state.to_string()))
        .unwrap();

    assert_eq!(processed, vec!["(False, False, False)"]);
}
