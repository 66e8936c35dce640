//! Gcmd: reachability analysis for guarded commands
//!
//! A guarded command is a rule of the form "if the guard holds, apply the
//! action set", over a fixed set of named boolean variables. Gcmd computes
//! every state reachable from an initial state by repeatedly firing enabled
//! commands.
//!
//! # Core Concepts
//!
//! - **State**: a boolean vector over a total order of named variables
//! - **Guard**: a conjunction of equalities, checked with [`sat`]
//! - **Action set**: unconditional assignments, applied with [`apply`]
//! - **Exploration**: a work-list fixpoint producing a [`Reachability`] graph
//!
//! # Example
//!
//! ```rust
//! use gcmd::builder::SystemBuilder;
//! use gcmd::explore::Explorer;
//! use gcmd::gcmd;
//!
//! let system = SystemBuilder::new()
//!     .variables(["x", "y", "z"])
//!     .command(gcmd!("x" when { x: false } then { x: true }))
//!     .command(gcmd!("y" when { x: true } then { y: true }))
//!     .build()
//!     .unwrap();
//!
//! let mut processed = Vec::new();
//! let graph = Explorer::new(&system)
//!     .run_with(|state| processed.push(format!("Processing {state}")))
//!     .unwrap();
//!
//! assert_eq!(processed[0], "Processing (False, False, False)");
//! assert_eq!(graph.len(), 3);
//! ```

pub mod builder;
pub mod core;
pub mod explore;

// Re-export commonly used types
pub use crate::builder::{BuildError, GcmdDef, System, SystemBuilder, SystemDef};
pub use crate::core::{
    apply, sat, ActionSet, Gcmd, Guard, State, StateError, Trace, TraceError, Var,
    Variables,
};
pub use crate::explore::{ExploreConfig, ExploreError, Explorer, Reachability, SearchOrder};
