//! Errors raised by state lookups, updates and traces.

use super::state::State;
use super::vars::Var;
use thiserror::Error;

/// Errors that can occur when reading or writing state variables.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// A guard or action set refers to a variable the state does not hold.
    #[error("Variable {var} is not part of a state of arity {arity}")]
    UnknownVariable { var: Var, arity: usize },

    /// A variable name is not declared in the variable table.
    #[error("Unknown variable name '{0}'")]
    UnknownName(String),

    /// A variable name is declared twice in the same table.
    #[error("Variable '{0}' is declared more than once")]
    DuplicateName(String),

    /// A state does not have one value per declared variable.
    #[error("Expected a state of arity {expected}, got {found}")]
    ArityMismatch { expected: usize, found: usize },
}

/// Errors raised while extending a [`Trace`](super::Trace).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The step does not start where the trace currently ends.
    #[error("Step from {found} does not continue a trace ending in {expected}")]
    Discontinuous { expected: State, found: State },
}
