//! Mealy: a table-driven finite state machine engine.
//!
//! Mealy drives an object through a fixed set of states in response to
//! typed events. It is meant for protocol and session lifecycles, where one
//! event can lead to different next states depending on runtime conditions.
//!
//! # Core Concepts
//!
//! - **Event**: a value whose identity keys the transition tables
//! - **Action**: a side effect run on a transition or on state entry/exit
//! - **Guard**: a side-effect-free predicate choosing between candidates
//! - **State**: entry/exit hooks plus an ordered candidate list per event
//! - **StateMachine**: owns the driven object and processes events
//!
//! Actions run on the transition itself (Mealy style), between the source
//! state's exit hook and the target state's entry hook.
//!
//! # Example
//!
//! ```rust
//! use mealy::builder::{transition, StateMachineBuilder};
//! use mealy::event_enum;
//! use mealy::machine::{Outcome, State};
//!
//! event_enum! {
//!     enum Signal {
//!         Invite,
//!         Provisional,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Service {
//!     invites: u32,
//!     incoming: bool,
//! }
//!
//! let mut machine = StateMachineBuilder::<Service, Signal>::new()
//!     .state(State::new("Idle"))
//!     .state(State::new("EstablishingUnstable"))
//!     .initial("Idle")
//!     .transition(
//!         transition("Idle", Signal::Invite, "Idle")
//!             .action(|s: &mut Service, _: &Signal| s.invites += 1),
//!     )
//!     .unwrap()
//!     .transition(
//!         transition("Idle", Signal::Provisional, "EstablishingUnstable")
//!             .when(|s: &Service, _: &Signal| s.incoming),
//!     )
//!     .unwrap()
//!     .build(Service { incoming: true, ..Service::default() })
//!     .unwrap();
//!
//! machine.start().unwrap();
//! assert!(machine.post_event(&Signal::Invite).unwrap().is_processed());
//! assert!(machine.post_event(&Signal::Provisional).unwrap().is_processed());
//! assert_eq!(machine.current().name(), "EstablishingUnstable");
//! assert_eq!(machine.post_event(&Signal::Invite).unwrap(), Outcome::Ignored);
//! assert_eq!(machine.owner().invites, 1);
//! ```

extern crate self as mealy;

pub mod builder;
pub mod core;
pub mod machine;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Action, Event, Guard, StateId};
pub use crate::machine::{MachineError, Outcome, RunState, State, StateMachine, StateTable};
