//! The discovered transition graph.

use crate::core::{Gcmd, State, Step, Trace};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

/// Index of a state in discovery order.
pub type StateId = usize;

/// Name and ports of the command labelling an edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLabel {
    pub name: String,
    pub ports: BTreeSet<String>,
}

impl From<&Gcmd> for CommandLabel {
    fn from(cmd: &Gcmd) -> Self {
        Self {
            name: cmd.name.clone(),
            ports: cmd.ports.clone(),
        }
    }
}

/// A command firing between two discovered states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: StateId,
    /// Index of the command in its system
    pub command: usize,
    pub to: StateId,
}

/// Summary of an exploration run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub states: usize,
    pub edges: usize,
}

impl ExplorationStats {
    /// Wall-clock time spent exploring.
    pub fn duration(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// States reachable from an initial state, and the edges between them.
///
/// States are numbered in discovery order; the initial state is always `0`.
/// Every discovered state except the initial one records the edge it was
/// first reached by, so a witness [`Trace`] can be rebuilt for it.
#[derive(Clone, Debug)]
pub struct Reachability {
    states: Vec<State>,
    ids: HashMap<State, StateId>,
    parents: Vec<Option<Edge>>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<usize>>,
    labels: Vec<CommandLabel>,
    stats: ExplorationStats,
}

impl Reachability {
    pub(crate) fn seed(
        initial: State,
        labels: Vec<CommandLabel>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut ids = HashMap::new();
        ids.insert(initial.clone(), 0);
        Self {
            states: vec![initial],
            ids,
            parents: vec![None],
            edges: Vec::new(),
            outgoing: vec![Vec::new()],
            labels,
            stats: ExplorationStats {
                started_at,
                finished_at: started_at,
                states: 1,
                edges: 0,
            },
        }
    }

    /// Record a state not seen before, first reached from `from` via `command`.
    pub(crate) fn discover(&mut self, state: State, from: StateId, command: usize) -> StateId {
        let id = self.states.len();
        self.parents.push(Some(Edge {
            from,
            command,
            to: id,
        }));
        self.ids.insert(state.clone(), id);
        self.states.push(state);
        self.outgoing.push(Vec::new());
        id
    }

    pub(crate) fn connect(&mut self, edge: Edge) {
        self.outgoing[edge.from].push(self.edges.len());
        self.edges.push(edge);
    }

    pub(crate) fn finish(&mut self, finished_at: DateTime<Utc>) {
        self.stats.finished_at = finished_at;
        self.stats.states = self.states.len();
        self.stats.edges = self.edges.len();
    }

    pub fn initial(&self) -> &State {
        &self.states[0]
    }

    /// Discovered states in discovery order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    pub fn id_of(&self, state: &State) -> Option<StateId> {
        self.ids.get(state).copied()
    }

    pub fn contains(&self, state: &State) -> bool {
        self.ids.contains_key(state)
    }

    /// Number of discovered states. Never zero.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Label of the command with the given index.
    pub fn label(&self, command: usize) -> Option<&CommandLabel> {
        self.labels.get(command)
    }

    /// Outgoing edges of `state`; empty if it was not discovered.
    pub fn successors(&self, state: &State) -> impl Iterator<Item = &Edge> + '_ {
        let outgoing = self
            .id_of(state)
            .map_or(&[][..], |id| self.outgoing[id].as_slice());
        outgoing.iter().map(move |&e| &self.edges[e])
    }

    /// Discovered states in which no command is enabled.
    pub fn terminal_states(&self) -> Vec<&State> {
        self.outgoing
            .iter()
            .zip(&self.states)
            .filter(|(out, _)| out.is_empty())
            .map(|(_, state)| state)
            .collect()
    }

    /// Witness path from the initial state, `None` if `state` was not discovered.
    ///
    /// After breadth-first exploration the trace is a shortest one.
    pub fn trace_to(&self, state: &State) -> Option<Trace> {
        let mut id = self.id_of(state)?;
        let mut steps = Vec::new();
        while let Some(edge) = self.parents[id] {
            steps.push(Step {
                from: self.states[edge.from].clone(),
                command: self.labels[edge.command].name.clone(),
                to: self.states[edge.to].clone(),
            });
            id = edge.from;
        }
        steps.reverse();
        Some(Trace::from_steps(self.initial().clone(), steps))
    }

    pub fn stats(&self) -> &ExplorationStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> CommandLabel {
        CommandLabel {
            name: name.to_string(),
            ports: BTreeSet::new(),
        }
    }

    fn bits(b: &[bool]) -> State {
        State::from_bits(b.to_vec())
    }

    /// (F,F) -a-> (T,F) -b-> (T,T), plus a self loop on (T,T).
    fn chain() -> Reachability {
        let labels = vec![label("a"), label("b")];
        let mut graph = Reachability::seed(bits(&[false, false]), labels, Utc::now());
        let one = graph.discover(bits(&[true, false]), 0, 0);
        graph.connect(Edge { from: 0, command: 0, to: one });
        let two = graph.discover(bits(&[true, true]), one, 1);
        graph.connect(Edge { from: one, command: 1, to: two });
        graph.connect(Edge { from: two, command: 1, to: two });
        graph.finish(Utc::now());
        graph
    }

    #[test]
    fn seed_contains_only_initial_state() {
        let graph = Reachability::seed(bits(&[false]), Vec::new(), Utc::now());

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.initial(), &bits(&[false]));
        assert_eq!(graph.id_of(&bits(&[false])), Some(0));
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn trace_to_follows_parent_edges() {
        let graph = chain();
        let trace = graph.trace_to(&bits(&[true, true])).unwrap();

        assert_eq!(trace.commands(), vec!["a", "b"]);
        assert_eq!(trace.start(), &bits(&[false, false]));
        assert_eq!(trace.end(), &bits(&[true, true]));
        for pair in trace.steps().windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn trace_to_rebuilds_long_paths() {
        let counter = |n: usize| State::from_bits((0..8).map(|b| n >> b & 1 == 1).collect());
        let mut graph = Reachability::seed(counter(0), vec![label("inc")], Utc::now());
        let mut prev = 0;
        for n in 1..=200 {
            let next = graph.discover(counter(n), prev, 0);
            graph.connect(Edge { from: prev, command: 0, to: next });
            prev = next;
        }
        let last = graph.state(prev).unwrap().clone();

        let trace = graph.trace_to(&last).unwrap();

        assert_eq!(trace.len(), 200);
        assert_eq!(trace.start(), &counter(0));
        assert_eq!(trace.end(), &last);
    }

    #[test]
    fn trace_to_initial_state_is_empty() {
        let graph = chain();
        let trace = graph.trace_to(&bits(&[false, false])).unwrap();

        assert!(trace.is_empty());
    }

    #[test]
    fn trace_to_unknown_state_is_none() {
        assert!(chain().trace_to(&bits(&[false, true])).is_none());
    }

    #[test]
    fn self_loop_is_not_terminal() {
        let graph = chain();

        assert!(graph.terminal_states().is_empty());
        assert_eq!(graph.successors(&bits(&[true, true])).count(), 1);
    }

    #[test]
    fn successors_of_unknown_state_are_empty() {
        assert_eq!(chain().successors(&bits(&[false, true])).count(), 0);
    }

    #[test]
    fn stats_count_states_and_edges() {
        let graph = chain();

        assert_eq!(graph.stats().states, 3);
        assert_eq!(graph.stats().edges, 3);
        assert!(graph.stats().finished_at >= graph.stats().started_at);
    }

    #[test]
    fn duration_is_zero_for_equal_timestamps() {
        let now = Utc::now();
        let stats = ExplorationStats {
            started_at: now,
            finished_at: now,
            states: 1,
            edges: 0,
        };

        assert_eq!(stats.duration(), Duration::ZERO);
    }
}
