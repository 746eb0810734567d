//! Configuration errors for state tables and machine builders.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when configuring a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(name)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(name)")]
    MissingToState,

    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),

    #[error("State '{0}' is referenced but never declared")]
    UnknownState(String),

    #[error("Start state {0} is not in the state table")]
    UnknownStartState(StateId),

    #[error("State '{state}' has a transition to {target}, which is not in the state table")]
    DanglingTarget { state: String, target: StateId },

    #[error("Invalid machine options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
