//! Named boolean variables and their total order.

use super::action::ActionSet;
use super::error::StateError;
use super::guard::Guard;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Position of a variable in a [`Variables`] table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Var(pub usize);

impl Var {
    /// Position of this variable in a [`State`].
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered table of unique variable names.
///
/// The declaration order fixes the position of every variable in a
/// [`State`], which lets name-keyed guards, action sets and assignments be
/// resolved once into index-keyed form.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{apply, sat, Variables};
///
/// let vars = Variables::new(["x", "y"]).unwrap();
///
/// let mut state = vars.state([("x", true), ("y", false)]).unwrap();
/// assert!(sat(&state, &vars.guard([("x", true)]).unwrap()).unwrap());
///
/// apply(&mut state, &vars.actset([("y", true)]).unwrap()).unwrap();
/// assert_eq!(state.to_string(), "(True, True)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
    names: Vec<String>,
    index: HashMap<String, Var>,
}

impl Variables {
    /// Create a table from names in declaration order.
    ///
    /// Returns [`StateError::DuplicateName`] on the first repeated name.
    pub fn new<I, S>(names: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vars = Self::default();
        for name in names {
            let name = name.into();
            if vars.declare(&name).is_none() {
                return Err(StateError::DuplicateName(name));
            }
        }
        Ok(vars)
    }

    /// Append a variable, returning `None` if the name is already taken.
    pub fn declare(&mut self, name: &str) -> Option<Var> {
        if self.index.contains_key(name) {
            return None;
        }
        let var = Var(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), var);
        Some(var)
    }

    /// Find a variable by name.
    pub fn lookup(&self, name: &str) -> Option<Var> {
        self.index.get(name).copied()
    }

    /// Find a variable by name, failing with [`StateError::UnknownName`].
    pub fn var(&self, name: &str) -> Result<Var, StateError> {
        self.lookup(name)
            .ok_or_else(|| StateError::UnknownName(name.to_string()))
    }

    /// Name of a variable, if it belongs to this table.
    pub fn name(&self, var: Var) -> Option<&str> {
        self.names.get(var.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Var(i), name.as_str()))
    }

    /// The all-`false` state over this table.
    pub fn initial_state(&self) -> State {
        State::all_false(self.len())
    }

    /// Build a state from name-keyed values; unnamed variables are `false`.
    pub fn state<I, S>(&self, values: I) -> Result<State, StateError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut state = self.initial_state();
        for (name, value) in values {
            state.set(self.var(name.as_ref())?, value)?;
        }
        Ok(state)
    }

    /// Resolve a name-keyed guard.
    pub fn guard<I, S>(&self, constraints: I) -> Result<Guard, StateError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        self.resolve(constraints).map(Guard::from_iter)
    }

    /// Resolve a name-keyed action set.
    pub fn actset<I, S>(&self, assignments: I) -> Result<ActionSet, StateError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        self.resolve(assignments).map(ActionSet::from_iter)
    }

    /// Name-keyed view of a state.
    ///
    /// Positions beyond this table are skipped.
    pub fn valuation<'a>(&'a self, state: &State) -> BTreeMap<&'a str, bool> {
        self.names
            .iter()
            .zip(state.bits())
            .map(|(name, bit)| (name.as_str(), *bit))
            .collect()
    }

    fn resolve<I, S>(&self, pairs: I) -> Result<Vec<(Var, bool)>, StateError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| Ok((self.var(name.as_ref())?, value)))
            .collect()
    }
}
