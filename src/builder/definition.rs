//! Name-keyed, serializable system definitions.

use crate::builder::error::BuildError;
use crate::builder::system::{System, SystemBuilder};
use crate::explore::ExploreConfig;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A guarded command as written by a user, keyed by variable name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GcmdDef {
    pub name: String,
    #[serde(default)]
    pub guard: BTreeMap<String, bool>,
    #[serde(default)]
    pub ports: BTreeSet<String>,
    #[serde(default)]
    pub actset: BTreeMap<String, bool>,
}

impl GcmdDef {
    /// Create a command with an empty guard, no ports and no actions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Require `var == value` before firing.
    pub fn when(mut self, var: impl Into<String>, value: bool) -> Self {
        self.guard.insert(var.into(), value);
        self
    }

    /// Attach a port label.
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.ports.insert(port.into());
        self
    }

    /// Assign `var := value` when firing.
    pub fn then(mut self, var: impl Into<String>, value: bool) -> Self {
        self.actset.insert(var.into(), value);
        self
    }
}

/// A complete system as loaded from JSON.
///
/// ```json
/// {
///   "variables": ["a", "b"],
///   "initial": { "b": true },
///   "commands": [{ "name": "set_a", "guard": { "a": false }, "actset": { "a": true } }],
///   "config": { "order": "dfs" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemDef {
    pub variables: Vec<String>,
    /// Initial values; variables not listed start `false`.
    #[serde(default)]
    pub initial: BTreeMap<String, bool>,
    #[serde(default)]
    pub commands: Vec<GcmdDef>,
    #[serde(default)]
    pub config: ExploreConfig,
}

impl SystemDef {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve into a [`System`]. The embedded config is dropped.
    pub fn build(self) -> Result<System, BuildError> {
        SystemBuilder::new()
            .variables(self.variables)
            .initial_values(self.initial)
            .commands(self.commands)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::SearchOrder;

    #[test]
    fn fluent_api_builds_definition() {
        let def = GcmdDef::new("go").when("a", false).port("p").then("a", true);

        assert_eq!(def.name, "go");
        assert_eq!(def.guard.get("a"), Some(&false));
        assert!(def.ports.contains("p"));
        assert_eq!(def.actset.get("a"), Some(&true));
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let def = SystemDef::from_json(r#"{ "variables": ["a", "b", "c"] }"#).unwrap();

        assert_eq!(def.variables.len(), 3);
        assert!(def.initial.is_empty());
        assert!(def.commands.is_empty());
        assert_eq!(def.config, ExploreConfig::default());
    }

    #[test]
    fn full_json_is_parsed() {
        let def = SystemDef::from_json(
            r#"{
                "variables": ["a", "b"],
                "initial": { "b": true },
                "commands": [
                    { "name": "set_a", "guard": { "a": false }, "ports": ["p"], "actset": { "a": true } }
                ],
                "config": { "order": "dfs", "max_states": 10 }
            }"#,
        )
        .unwrap();

        assert_eq!(
            def.commands[0],
            GcmdDef::new("set_a").when("a", false).port("p").then("a", true)
        );
        assert_eq!(def.config.order, SearchOrder::Dfs);
        assert_eq!(def.config.max_states, Some(10));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = SystemDef::from_json(r#"{ "variables": [], "comands": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn build_resolves_initial_values() {
        let def =
            SystemDef::from_json(r#"{ "variables": ["a", "b"], "initial": { "b": true } }"#)
                .unwrap();
        let system = def.build().unwrap();

        assert_eq!(system.initial().bits(), &[false, true]);
    }
}
