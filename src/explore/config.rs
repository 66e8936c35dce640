//! Exploration settings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Order in which the work-list is drained.
///
/// Also accepted on the command line as `bfs` or `dfs`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    /// Queue: states are expanded in discovery order.
    #[default]
    Bfs,
    /// Stack: the most recently discovered state is expanded first.
    Dfs,
}

/// Settings for a single exploration run.
///
/// Deserializes from the `config` object of a system definition; missing
/// fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExploreConfig {
    pub order: SearchOrder,
    /// Upper bound on discovered states, `None` for unbounded.
    pub max_states: Option<usize>,
}

impl ExploreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    pub fn max_states(mut self, limit: usize) -> Self {
        self.max_states = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_bfs() {
        let config = ExploreConfig::default();

        assert_eq!(config.order, SearchOrder::Bfs);
        assert_eq!(config.max_states, None);
    }

    #[test]
    fn fluent_api_sets_fields() {
        let config = ExploreConfig::new().order(SearchOrder::Dfs).max_states(8);

        assert_eq!(config.order, SearchOrder::Dfs);
        assert_eq!(config.max_states, Some(8));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ExploreConfig = serde_json::from_str(r#"{ "order": "dfs" }"#).unwrap();

        assert_eq!(config, ExploreConfig::new().order(SearchOrder::Dfs));
    }

    #[test]
    fn command_line_names_match_json_names() {
        for order in [SearchOrder::Bfs, SearchOrder::Dfs] {
            let json = serde_json::to_string(&order).unwrap();
            let name = order.to_possible_value().unwrap().get_name().to_string();

            assert_eq!(json, format!("\"{name}\""));
            assert_eq!(SearchOrder::from_str(&name, false), Ok(order));
        }
    }
}
