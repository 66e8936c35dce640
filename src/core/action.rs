//! Action sets: unconditional assignments producing successor states.

use super::error::StateError;
use super::guard::Guard;
use super::state::State;
use super::vars::Var;
use std::collections::BTreeMap;

/// Set of `variable := value` assignments.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{ActionSet, State, Var};
///
/// let actset = ActionSet::new().assign(Var(0), true);
/// let mut state = State::all_false(2);
///
/// actset.apply_to(&mut state).unwrap();
/// assert_eq!(state.bits(), &[true, false]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionSet {
    assignments: BTreeMap<Var, bool>,
}

impl ActionSet {
    /// Create the empty action set, which leaves every state unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the assignment `var := value`, replacing any earlier one on `var`.
    pub fn assign(mut self, var: Var, value: bool) -> Self {
        self.assignments.insert(var, value);
        self
    }

    /// Overwrite every assigned variable of `state` in place.
    ///
    /// All variables are checked before anything is written, so on
    /// [`StateError::UnknownVariable`] the state is left untouched.
    pub fn apply_to(&self, state: &mut State) -> Result<(), StateError> {
        for &var in self.assignments.keys() {
            state.check(var)?;
        }
        for (&var, &value) in &self.assignments {
            state.set(var, value)?;
        }
        Ok(())
    }

    /// Apply to a copy of `state`.
    pub fn successor(&self, state: &State) -> Result<State, StateError> {
        let mut next = state.clone();
        self.apply_to(&mut next)?;
        Ok(next)
    }

    /// Drop assignments that `guard` already guarantees.
    ///
    /// Wherever `guard` holds, the result produces the same successor as
    /// `self`.
    pub fn normalized_against(&self, guard: &Guard) -> Self {
        self.iter()
            .filter(|&(var, value)| guard.get(var) != Some(value))
            .collect()
    }

    /// Assigned value of `var`, if any.
    pub fn get(&self, var: Var) -> Option<bool> {
        self.assignments.get(&var).copied()
    }

    /// Iterate over assignments in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.assignments.iter().map(|(&var, &value)| (var, value))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<(Var, bool)> for ActionSet {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

/// Apply `actset` to `state` in place.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{apply, Variables};
///
/// let vars = Variables::new(["x", "y"]).unwrap();
/// let mut state = vars.state([("x", false), ("y", false)]).unwrap();
///
/// apply(&mut state, &vars.actset([("x", true)]).unwrap()).unwrap();
/// assert_eq!(state, vars.state([("x", true), ("y", false)]).unwrap());
/// ```
pub fn apply(state: &mut State, actset: &ActionSet) -> Result<(), StateError> {
    actset.apply_to(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variables;

    #[test]
    fn apply_overwrites_assigned_variables_only() {
        let vars = Variables::new(["x", "y"]).unwrap();
        let mut state = vars.state([("x", false), ("y", false)]).unwrap();

        apply(&mut state, &vars.actset([("x", true)]).unwrap()).unwrap();

        assert_eq!(state, vars.state([("x", true), ("y", false)]).unwrap());
    }

    #[test]
    fn empty_actset_leaves_state_unchanged() {
        let mut state = State::from_bits(vec![true, false, true]);
        let before = state.clone();

        apply(&mut state, &ActionSet::new()).unwrap();

        assert_eq!(state, before);
    }

    #[test]
    fn apply_can_assign_the_current_value() {
        let mut state = State::from_bits(vec![true]);
        apply(&mut state, &ActionSet::new().assign(Var(0), true)).unwrap();

        assert_eq!(state.bits(), &[true]);
    }

    #[test]
    fn unknown_variable_leaves_state_untouched() {
        let mut state = State::all_false(2);
        let actset = ActionSet::new().assign(Var(0), true).assign(Var(7), true);

        let result = apply(&mut state, &actset);

        assert_eq!(
            result,
            Err(StateError::UnknownVariable {
                var: Var(7),
                arity: 2
            })
        );
        assert_eq!(state, State::all_false(2));
    }

    #[test]
    fn normalization_drops_assignments_implied_by_guard() {
        let guard = Guard::new().require(Var(0), true).require(Var(1), false);
        let actset = ActionSet::new()
            .assign(Var(0), true)
            .assign(Var(1), true)
            .assign(Var(2), false);

        let normalized = actset.normalized_against(&guard);

        assert_eq!(normalized, ActionSet::new().assign(Var(1), true).assign(Var(2), false));
        let state = State::from_bits(vec![true, false, true]);
        assert_eq!(normalized.successor(&state), actset.successor(&state));
    }

    #[test]
    fn normalization_against_empty_guard_keeps_everything() {
        let actset = ActionSet::new().assign(Var(0), false);

        assert_eq!(actset.normalized_against(&Guard::new()), actset);
    }

    #[test]
    fn successor_does_not_mutate_source() {
        let state = State::all_false(2);
        let next = ActionSet::new()
            .assign(Var(1), true)
            .successor(&state)
            .unwrap();

        assert_eq!(state, State::all_false(2));
        assert_eq!(next.bits(), &[false, true]);
    }
}
