//! State-space exploration.
//!
//! This module is the "imperative shell" around the pure core: it drives a
//! work-list over a [`System`](crate::builder::System), logs progress and
//! records the discovered transition graph.
//!
//! # Example
//!
//! ```rust
//! use gcmd::builder::SystemBuilder;
//! use gcmd::explore::{ExploreConfig, SearchOrder};
//! use gcmd::gcmd;
//!
//! let system = SystemBuilder::new()
//!     .variables(["a", "b"])
//!     .command(gcmd!("set_a" when { a: false } then { a: true }))
//!     .command(gcmd!("set_b" when { a: true, b: false } then { b: true }))
//!     .build()
//!     .unwrap();
//!
//! let graph = system
//!     .explore(ExploreConfig::new().order(SearchOrder::Dfs))
//!     .unwrap();
//!
//! assert_eq!(graph.len(), 3);
//! assert_eq!(graph.terminal_states().len(), 1);
//! ```

mod config;
mod error;
mod explorer;
mod graph;

pub use config::{ExploreConfig, SearchOrder};
pub use error::ExploreError;
pub use explorer::Explorer;
pub use graph::{CommandLabel, Edge, ExplorationStats, Reachability, StateId};
