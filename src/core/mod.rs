//! Core guarded-command types and logic.
//!
//! This module contains the pure functional core:
//! - Variable tables and boolean state vectors
//! - Guards (`sat`) and action sets (`apply`)
//! - Guarded commands and immutable witness traces
//!
//! Nothing in this module performs I/O or logging.

mod action;
mod command;
mod error;
mod guard;
mod state;
mod trace;
mod vars;

pub use action::{apply, ActionSet};
pub use command::{Gcmd, GcmdDisplay};
pub use error::{StateError, TraceError};
pub use guard::{sat, Guard};
pub use state::State;
pub use trace::{Step, Trace};
pub use vars::{Var, Variables};
