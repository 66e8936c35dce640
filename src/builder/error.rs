//! Build errors for system definitions.

use crate::core::StateError;
use std::fmt;
use thiserror::Error;

/// Where in a definition a variable name was referenced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Site {
    Initial,
    Guard { command: String },
    Actset { command: String },
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial assignment"),
            Self::Guard { command } => write!(f, "guard of command `{command}`"),
            Self::Actset { command } => write!(f, "action set of command `{command}`"),
        }
    }
}

/// A single problem found while resolving a definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionIssue {
    #[error("Variable '{0}' is declared more than once")]
    DuplicateVariable(String),

    #[error("Unknown variable '{name}' in {site}")]
    UnknownVariable { name: String, site: Site },
}

/// Errors that can occur when building a system.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every issue found in the definition, in discovery order.
    #[error("Invalid system definition:{}", list_issues(.0))]
    Invalid(Vec<DefinitionIssue>),

    #[error(transparent)]
    State(#[from] StateError),
}

fn list_issues(issues: &[DefinitionIssue]) -> String {
    issues.iter().map(|issue| format!("\n  - {issue}")).collect()
}
