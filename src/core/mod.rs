//! Core primitives of the engine.
//!
//! This module contains the pieces every transition table is built from:
//! - Event identities via the `Event` trait
//! - Actions run on transitions and on state entry/exit
//! - Guard predicates that choose between candidate transitions
//! - State handles and the transition journal

mod action;
mod event;
mod guard;
mod history;
mod state;

pub use action::{Action, ActionFn};
pub use event::Event;
pub use guard::{Guard, GuardFn};
pub use history::{StateHistory, TransitionRecord};
pub use state::StateId;
