//! The state machine engine.
//!
//! States live in a [`StateTable`] and refer to each other by [`StateId`].
//! A [`StateMachine`] takes ownership of the table and of the driven
//! object, then processes events one at a time:
//!
//! 1. ignore the event unless the machine is running;
//! 2. scan the current state's candidates for the event identity in
//!    registration order, ignoring the event if none is eligible;
//! 3. run the current state's exit hook;
//! 4. run the action of the first eligible candidate;
//! 5. run the target state's entry hook.
//!
//! [`StateId`]: crate::core::StateId

mod error;
#[allow(clippy::module_inception)]
mod machine;
mod options;
mod run_state;
mod state;
mod table;
mod transition;

pub use error::MachineError;
pub use machine::{MachineSnapshot, Outcome, StateMachine};
pub use options::MachineOptions;
pub use run_state::RunState;
pub use state::State;
pub use table::StateTable;
pub use transition::Transition;
