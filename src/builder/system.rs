//! Builder for constructing guarded-command systems.

use crate::builder::definition::GcmdDef;
use crate::builder::error::{BuildError, DefinitionIssue, Site};
use crate::core::{ActionSet, Gcmd, Guard, State, StateError, Var, Variables};
use crate::explore::{ExploreConfig, ExploreError, Explorer, Reachability};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<DefinitionIssue>>;

/// A resolved system: variables, initial state and commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct System {
    vars: Variables,
    initial: State,
    commands: Vec<Gcmd>,
}

impl System {
    /// Create a system starting in the all-`false` state.
    pub fn new(vars: Variables, commands: Vec<Gcmd>) -> Self {
        let initial = vars.initial_state();
        Self {
            vars,
            initial,
            commands,
        }
    }

    /// Replace the initial state.
    ///
    /// Fails with [`StateError::ArityMismatch`] unless `initial` holds one
    /// value per declared variable.
    pub fn with_initial(mut self, initial: State) -> Result<Self, StateError> {
        if initial.arity() != self.vars.len() {
            return Err(StateError::ArityMismatch {
                expected: self.vars.len(),
                found: initial.arity(),
            });
        }
        self.initial = initial;
        Ok(self)
    }

    pub fn variables(&self) -> &Variables {
        &self.vars
    }

    pub fn initial(&self) -> &State {
        &self.initial
    }

    pub fn commands(&self) -> &[Gcmd] {
        &self.commands
    }

    /// Every enabled command in `state` paired with its successor, in
    /// command order.
    pub fn successors<'a>(&'a self, state: &State) -> Result<Vec<(&'a Gcmd, State)>, StateError> {
        let mut next = Vec::new();
        for cmd in &self.commands {
            if let Some(to) = cmd.fire(state)? {
                next.push((cmd, to));
            }
        }
        Ok(next)
    }

    /// Explore the reachable state space.
    pub fn explore(&self, config: ExploreConfig) -> Result<Reachability, ExploreError> {
        Explorer::new(self).with_config(config).run()
    }
}

/// Builder for constructing systems with a fluent API.
///
/// Names are resolved in [`build`](Self::build), which reports every
/// problem at once rather than stopping at the first.
#[derive(Clone, Debug, Default)]
pub struct SystemBuilder {
    variables: Vec<String>,
    initial: BTreeMap<String, bool>,
    commands: Vec<GcmdDef>,
}

impl SystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable. Declaration order fixes state positions.
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variables.push(name.into());
        self
    }

    /// Declare several variables at once.
    pub fn variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the initial value of a variable (default `false`).
    pub fn initially(mut self, name: impl Into<String>, value: bool) -> Self {
        self.initial.insert(name.into(), value);
        self
    }

    /// Set several initial values at once.
    pub fn initial_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        self.initial
            .extend(values.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// Add a command definition.
    pub fn command(mut self, def: GcmdDef) -> Self {
        self.commands.push(def);
        self
    }

    /// Add several command definitions at once.
    pub fn commands(mut self, defs: impl IntoIterator<Item = GcmdDef>) -> Self {
        self.commands.extend(defs);
        self
    }

    /// Resolve all names and build the system.
    pub fn build(self) -> Result<System, BuildError> {
        let mut checks: Vec<Check> = Vec::new();

        let mut vars = Variables::default();
        for name in &self.variables {
            checks.push(match vars.declare(name) {
                Some(_) => Validation::success(()),
                None => Validation::fail(DefinitionIssue::DuplicateVariable(name.clone())),
            });
        }

        let initial_values = resolve(&vars, &self.initial, Site::Initial, &mut checks);

        let mut commands = Vec::with_capacity(self.commands.len());
        for def in self.commands {
            let guard: Guard = resolve(
                &vars,
                &def.guard,
                Site::Guard {
                    command: def.name.clone(),
                },
                &mut checks,
            )
            .into_iter()
            .collect();
            let actset: ActionSet = resolve(
                &vars,
                &def.actset,
                Site::Actset {
                    command: def.name.clone(),
                },
                &mut checks,
            )
            .into_iter()
            .collect();
            commands.push(Gcmd::new(def.name, guard, def.ports, actset));
        }

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(_) => {}
            Validation::Failure(issues) => {
                return Err(BuildError::Invalid(issues.iter().cloned().collect()));
            }
        }

        let mut initial = vars.initial_state();
        initial_values
            .into_iter()
            .collect::<ActionSet>()
            .apply_to(&mut initial)?;

        System::new(vars, commands)
            .with_initial(initial)
            .map_err(BuildError::from)
    }
}

/// Resolve name-keyed values, recording a check per name.
fn resolve(
    vars: &Variables,
    values: &BTreeMap<String, bool>,
    site: Site,
    checks: &mut Vec<Check>,
) -> Vec<(Var, bool)> {
    let mut resolved = Vec::with_capacity(values.len());
    for (name, &value) in values {
        match vars.lookup(name) {
            Some(var) => {
                resolved.push((var, value));
                checks.push(Validation::success(()));
            }
            None => checks.push(Validation::fail(DefinitionIssue::UnknownVariable {
                name: name.clone(),
                site: site.clone(),
            })),
        }
    }
    resolved
}
