//! Builder API for constructing guarded-command systems.
//!
//! Systems are written against variable names ([`GcmdDef`], [`SystemDef`])
//! and resolved once into the index-keyed form used by exploration.

pub mod definition;
pub mod error;
pub mod macros;
pub mod system;

pub use definition::{GcmdDef, SystemDef};
pub use error::{BuildError, DefinitionIssue, Site};
pub use system::{System, SystemBuilder};
