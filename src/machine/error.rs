//! Runtime errors reported by a state machine.

use super::run_state::RunState;
use thiserror::Error;

/// Errors that can occur while driving a state machine.
///
/// Event identities are rendered with their `Debug` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("Cannot {operation} while the machine is {run_state}")]
    InvalidRunState {
        operation: &'static str,
        run_state: RunState,
    },

    #[error("No eligible transition from state '{state}' for event {event}")]
    NoMatchingTransition { state: String, event: String },

    #[error("Eligible transition from state '{state}' for event {event} produced no target; a guard is unstable")]
    InternalConsistencyViolation { state: String, event: String },
}

impl MachineError {
    /// True for errors that halt the machine.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InternalConsistencyViolation { .. })
    }
}
