//! Boolean state vectors.
//!
//! A state is the truth assignment of every variable in a [`Variables`]
//! table, stored positionally. The same value is used as a set element
//! during exploration and, through the table, as a name-keyed mapping.
//!
//! [`Variables`]: super::Variables

use super::error::StateError;
use super::vars::Var;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-length assignment of boolean values, indexed by [`Var`].
///
/// States are hashable and totally ordered so they can be stored in visited
/// sets. They display as a tuple, e.g. `(False, True, False)`.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{State, Var};
///
/// let mut state = State::all_false(3);
/// assert_eq!(state.to_string(), "(False, False, False)");
///
/// state.set(Var(1), true).unwrap();
/// assert_eq!(state.get(Var(1)), Ok(true));
/// assert_eq!(state.bits(), &[false, true, false]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    bits: Vec<bool>,
}

impl State {
    /// Create a state of `arity` variables, all `false`.
    pub fn all_false(arity: usize) -> Self {
        Self {
            bits: vec![false; arity],
        }
    }

    /// Create a state from positional values.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of variables held by this state.
    pub fn arity(&self) -> usize {
        self.bits.len()
    }

    /// Positional values of this state.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Read a variable.
    ///
    /// Returns [`StateError::UnknownVariable`] if `var` is out of range.
    pub fn get(&self, var: Var) -> Result<bool, StateError> {
        self.bits
            .get(var.index())
            .copied()
            .ok_or(StateError::UnknownVariable {
                var,
                arity: self.arity(),
            })
    }

    /// Overwrite a variable.
    ///
    /// Returns [`StateError::UnknownVariable`] if `var` is out of range.
    pub fn set(&mut self, var: Var, value: bool) -> Result<(), StateError> {
        let arity = self.arity();
        let slot = self
            .bits
            .get_mut(var.index())
            .ok_or(StateError::UnknownVariable { var, arity })?;
        *slot = value;
        Ok(())
    }

    /// Check that `var` is addressable in this state.
    pub(crate) fn check(&self, var: Var) -> Result<(), StateError> {
        self.get(var).map(|_| ())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", if *bit { "True" } else { "False" })?;
        }
        if self.bits.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_false_has_requested_arity() {
        let state = State::all_false(3);
        assert_eq!(state.arity(), 3);
        assert!(state.bits().iter().all(|b| !b));
    }

    #[test]
    fn set_overwrites_single_variable() {
        let mut state = State::all_false(3);
        state.set(Var(2), true).unwrap();

        assert_eq!(state.bits(), &[false, false, true]);
    }

    #[test]
    fn get_out_of_range_is_an_error() {
        let state = State::all_false(2);

        assert_eq!(
            state.get(Var(2)),
            Err(StateError::UnknownVariable {
                var: Var(2),
                arity: 2
            })
        );
    }

    #[test]
    fn set_out_of_range_leaves_state_unchanged() {
        let mut state = State::from_bits(vec![true, false]);
        assert!(state.set(Var(5), false).is_err());
        assert_eq!(state.bits(), &[true, false]);
    }

    #[test]
    fn display_matches_tuple_notation() {
        assert_eq!(State::all_false(0).to_string(), "()");
        assert_eq!(State::from_bits(vec![true]).to_string(), "(True,)");
        assert_eq!(
            State::from_bits(vec![false, true, false]).to_string(),
            "(False, True, False)"
        );
    }

    #[test]
    fn states_are_usable_as_set_keys() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        assert!(seen.insert(State::all_false(2)));
        assert!(!seen.insert(State::from_bits(vec![false, false])));
        assert!(seen.insert(State::from_bits(vec![true, false])));
    }

    #[test]
    fn state_serializes_as_plain_array() {
        let state = State::from_bits(vec![true, false]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "[true,false]");

        let deserialized: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
