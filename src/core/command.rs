//! Guarded commands.

use super::action::ActionSet;
use super::error::StateError;
use super::guard::Guard;
use super::state::State;
use super::vars::{Var, Variables};
use std::collections::BTreeSet;
use std::fmt;

/// A named rule: if `guard` holds, apply `actset`.
///
/// `ports` are opaque labels. They are carried onto the transitions this
/// command produces but never interpreted.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{Gcmd, Variables};
///
/// let vars = Variables::new(["busy"]).unwrap();
/// let take = Gcmd::new(
///     "take",
///     vars.guard([("busy", false)]).unwrap(),
///     ["req"],
///     vars.actset([("busy", true)]).unwrap(),
/// );
///
/// let idle = vars.initial_state();
/// let busy = take.fire(&idle).unwrap().unwrap();
/// assert_eq!(busy.to_string(), "(True,)");
/// assert!(take.fire(&busy).unwrap().is_none());
///
/// assert_eq!(
///     take.display(&vars).to_string(),
///     "`take`  {busy: false} ==[req]==> {busy: true}"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gcmd {
    pub name: String,
    pub guard: Guard,
    pub ports: BTreeSet<String>,
    pub actset: ActionSet,
}

impl Gcmd {
    pub fn new<N, P, S>(name: N, guard: Guard, ports: P, actset: ActionSet) -> Self
    where
        N: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            guard,
            ports: ports.into_iter().map(Into::into).collect(),
            actset,
        }
    }

    /// Check whether the guard holds in `state`.
    pub fn is_enabled(&self, state: &State) -> Result<bool, StateError> {
        self.guard.check(state)
    }

    /// Successor of `state`, or `None` if the command is not enabled there.
    pub fn fire(&self, state: &State) -> Result<Option<State>, StateError> {
        if !self.is_enabled(state)? {
            return Ok(None);
        }
        self.actset.successor(state).map(Some)
    }

    /// Same command with assignments its own guard already implies removed.
    pub fn normalized(&self) -> Self {
        Self {
            actset: self.actset.normalized_against(&self.guard),
            ..self.clone()
        }
    }

    /// Whether the guards of `self` and `other` can never hold together.
    pub fn is_mutex_with(&self, other: &Gcmd) -> bool {
        self.guard.conflicts_with(&other.guard)
    }

    /// Whether firing can change any variable.
    ///
    /// Reports assignments as written; call [`normalized`](Self::normalized)
    /// first to ignore those the guard already implies.
    pub fn has_effect(&self) -> bool {
        !self.actset.is_empty()
    }

    /// Render the command with variable names taken from `vars`.
    pub fn display<'a>(&'a self, vars: &'a Variables) -> GcmdDisplay<'a> {
        GcmdDisplay { cmd: self, vars }
    }
}

/// Formatter returned by [`Gcmd::display`].
pub struct GcmdDisplay<'a> {
    cmd: &'a Gcmd,
    vars: &'a Variables,
}

impl GcmdDisplay<'_> {
    fn assignments(
        &self,
        f: &mut fmt::Formatter<'_>,
        pairs: impl Iterator<Item = (Var, bool)>,
    ) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in pairs.enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.vars.name(var) {
                Some(name) => write!(f, "{name}: {value}")?,
                None => write!(f, "{var}: {value}")?,
            }
        }
        write!(f, "}}")
    }
}

impl fmt::Display for GcmdDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`  ", self.cmd.name)?;
        self.assignments(f, self.cmd.guard.iter())?;
        write!(f, " ==[")?;
        for (i, port) in self.cmd.ports.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{port}")?;
        }
        write!(f, "]==> ")?;
        self.assignments(f, self.cmd.actset.iter())
    }
}
