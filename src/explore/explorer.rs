//! Work-list reachability over a guarded-command system.

use crate::builder::System;
use crate::core::State;
use crate::explore::config::{ExploreConfig, SearchOrder};
use crate::explore::error::ExploreError;
use crate::explore::graph::{CommandLabel, Edge, Reachability, StateId};
use chrono::Utc;
use log::{debug, trace};
use std::collections::VecDeque;

/// Computes the states reachable from a system's initial state.
///
/// The visited set and the work-list both start as the initial state. Each
/// popped state is reported, then every enabled command is applied to it;
/// successors not seen before join both sets. Exploration ends when the
/// work-list is empty.
pub struct Explorer<'s> {
    system: &'s System,
    config: ExploreConfig,
}

impl<'s> Explorer<'s> {
    pub fn new(system: &'s System) -> Self {
        Self {
            system,
            config: ExploreConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExploreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// Explore without observing expansions.
    pub fn run(&self) -> Result<Reachability, ExploreError> {
        self.run_with(|_| {})
    }

    /// Explore, calling `on_expand` with each state as it leaves the work-list.
    pub fn run_with<F>(&self, mut on_expand: F) -> Result<Reachability, ExploreError>
    where
        F: FnMut(&State),
    {
        if self.config.max_states == Some(0) {
            return Err(ExploreError::StateLimit { limit: 0 });
        }

        let commands = self.system.commands();
        debug!(
            "Exploring {} command(s) over {} variable(s) ({:?})",
            commands.len(),
            self.system.variables().len(),
            self.config.order
        );

        let mut graph = Reachability::seed(
            self.system.initial().clone(),
            commands.iter().map(CommandLabel::from).collect(),
            Utc::now(),
        );
        let mut todo: VecDeque<StateId> = VecDeque::from([0]);

        while let Some(from) = self.pop(&mut todo) {
            let state = graph.states()[from].clone();
            on_expand(&state);

            for (command, cmd) in commands.iter().enumerate() {
                let Some(next) = cmd.fire(&state)? else {
                    continue;
                };
                trace!("`{}` fires in {state}, yielding {next}", cmd.name);

                let to = match graph.id_of(&next) {
                    Some(id) => id,
                    None => {
                        if let Some(limit) = self.config.max_states {
                            if graph.len() >= limit {
                                return Err(ExploreError::StateLimit { limit });
                            }
                        }
                        let id = graph.discover(next, from, command);
                        todo.push_back(id);
                        id
                    }
                };
                graph.connect(Edge { from, command, to });
            }
        }

        graph.finish(Utc::now());
        let stats = graph.stats();
        debug!(
            "Discovered {} state(s) and {} edge(s) in {:?}",
            stats.states,
            stats.edges,
            stats.duration()
        );
        Ok(graph)
    }

    fn pop(&self, todo: &mut VecDeque<StateId>) -> Option<StateId> {
        match self.config.order {
            SearchOrder::Bfs => todo.pop_front(),
            SearchOrder::Dfs => todo.pop_back(),
        }
    }
}
