//! Witness traces through a state space.
//!
//! Provides immutable tracking of command applications from a start state,
//! following functional programming principles.

use super::error::TraceError;
use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single command application.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{State, Step};
///
/// let step = Step {
///     from: State::from_bits(vec![false]),
///     command: "set".to_string(),
///     to: State::from_bits(vec![true]),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The state the command fired in
    pub from: State,
    /// Name of the command that fired
    pub command: String,
    /// The resulting state
    pub to: State,
}

/// Ordered sequence of steps starting at a fixed state.
///
/// Traces are immutable - the `record` method returns a new trace with the
/// step appended.
///
/// # Example
///
/// ```rust
/// use gcmd::core::{State, Step, Trace};
///
/// let a = State::from_bits(vec![false, false]);
/// let b = State::from_bits(vec![true, false]);
/// let c = State::from_bits(vec![true, true]);
///
/// let trace = Trace::new(a.clone())
///     .record(Step { from: a.clone(), command: "first".into(), to: b.clone() })
///     .unwrap()
///     .record(Step { from: b.clone(), command: "second".into(), to: c.clone() })
///     .unwrap();
///
/// assert_eq!(trace.get_path(), vec![&a, &b, &c]);
/// assert_eq!(trace.end(), &c);
///
/// // Steps must continue from the end of the trace.
/// let gap = Step { from: a.clone(), command: "again".into(), to: b };
/// assert!(trace.record(gap).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    start: State,
    steps: Vec<Step>,
}

impl Trace {
    /// Create an empty trace at `start`.
    pub fn new(start: State) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Build a trace from steps already known to be contiguous.
    pub(crate) fn from_steps(start: State, steps: Vec<Step>) -> Self {
        Self { start, steps }
    }

    /// Record a step, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace.
    /// Fails with [`TraceError::Discontinuous`] unless `step.from` is the
    /// current end state.
    pub fn record(&self, step: Step) -> Result<Self, TraceError> {
        if &step.from != self.end() {
            return Err(TraceError::Discontinuous {
                expected: self.end().clone(),
                found: step.from,
            });
        }
        let mut steps = self.steps.clone();
        steps.push(step);
        Ok(Self {
            start: self.start.clone(),
            steps,
        })
    }

    /// States traversed in order: the start state, then the target of each step.
    pub fn get_path(&self) -> Vec<&State> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Names of the commands fired, in order.
    pub fn commands(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.command.as_str()).collect()
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    /// Final state of the trace.
    pub fn end(&self) -> &State {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
