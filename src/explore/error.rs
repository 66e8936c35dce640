//! Exploration error types.

use crate::core::StateError;
use thiserror::Error;

/// Errors that can occur while exploring a state space
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    /// A command referenced a variable outside the explored states
    #[error("Failed to evaluate command: {0}")]
    State(#[from] StateError),

    /// More states were discovered than the configured bound allows
    #[error("State limit of {limit} exceeded")]
    StateLimit { limit: usize },
}
