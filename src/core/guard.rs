//! Guard predicates for controlling command execution.
//!
//! A guard is a conjunction of equality constraints on boolean variables.
//! Variables the guard does not mention are unconstrained.

use super::error::StateError;
use super::state::State;
use super::vars::Var;
use std::collections::BTreeMap;

/// Conjunction of `variable == value` constraints.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{Guard, State, Var};
///
/// let guard = Guard::new().require(Var(0), true);
///
/// assert!(guard.check(&State::from_bits(vec![true, false])).unwrap());
/// assert!(!guard.check(&State::from_bits(vec![false, false])).unwrap());
///
/// // The empty guard holds everywhere.
/// assert!(Guard::new().check(&State::all_false(2)).unwrap());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Guard {
    constraints: BTreeMap<Var, bool>,
}

impl Guard {
    /// Create the empty (always satisfied) guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the constraint `var == value`, replacing any earlier one on `var`.
    pub fn require(mut self, var: Var, value: bool) -> Self {
        self.constraints.insert(var, value);
        self
    }

    /// Check whether `state` satisfies every constraint.
    ///
    /// Stops at the first mismatch. A constrained variable that `state` does
    /// not hold yields [`StateError::UnknownVariable`].
    pub fn check(&self, state: &State) -> Result<bool, StateError> {
        for (&var, &required) in &self.constraints {
            if state.get(var)? != required {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether the two guards require different values for some variable,
    /// so no state satisfies both.
    pub fn conflicts_with(&self, other: &Guard) -> bool {
        self.iter()
            .any(|(var, value)| other.get(var).is_some_and(|theirs| theirs != value))
    }

    /// Required value of `var`, if constrained.
    pub fn get(&self, var: Var) -> Option<bool> {
        self.constraints.get(&var).copied()
    }

    /// Iterate over constraints in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.constraints.iter().map(|(&var, &value)| (var, value))
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl FromIterator<(Var, bool)> for Guard {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

/// Check whether `state` satisfies `guard`.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{sat, Variables};
///
/// let vars = Variables::new(["x", "y"]).unwrap();
/// let state = vars.state([("x", true), ("y", false)]).unwrap();
///
/// assert!(sat(&state, &vars.guard([("x", true)]).unwrap()).unwrap());
/// assert!(!sat(&state, &vars.guard([("x", false)]).unwrap()).unwrap());
/// ```
pub fn sat(state: &State, guard: &Guard) -> Result<bool, StateError> {
    guard.check(state)
}
