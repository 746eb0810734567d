//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring states and
//! transition rows by name, resolved into a [`StateTable`] at build time.
//!
//! [`StateTable`]: crate::machine::StateTable

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::{TransitionBuilder, TransitionRow};

use crate::core::Event;

/// Start a transition row from `from` to `to` on `event`.
///
/// # Example
///
/// ```
/// use mealy::builder::{transition, StateMachineBuilder};
/// use mealy::event_enum;
/// use mealy::machine::State;
///
/// event_enum! {
///     enum Signal {
///         Connect,
///         Drop,
///     }
/// }
///
/// let machine = StateMachineBuilder::<(), Signal>::new()
///     .state(State::new("Down"))
///     .state(State::new("Up"))
///     .initial("Down")
///     .transition(transition("Down", Signal::Connect, "Up"))
///     .unwrap()
///     .transition(transition("Up", Signal::Drop, "Down"))
///     .unwrap()
///     .build(())
///     .unwrap();
///
/// assert_eq!(machine.current().name(), "Down");
/// ```
pub fn transition<O, E>(
    from: impl Into<String>,
    event: E::Id,
    to: impl Into<String>,
) -> TransitionBuilder<O, E>
where
    O: 'static,
    E: Event + 'static,
{
    TransitionBuilder::new().from(from).on(event).to(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    enum Kind {
        Invite,
    }

    impl Event for Kind {
        type Id = Kind;

        fn id(&self) -> Kind {
            *self
        }
    }

    #[test]
    fn transition_prefills_required_fields() {
        let row = transition::<(), Kind>("Idle", Kind::Invite, "Idle")
            .build()
            .unwrap();

        assert_eq!(row.from, "Idle");
        assert_eq!(row.event, Kind::Invite);
        assert_eq!(row.to, "Idle");
    }

    #[test]
    fn transition_accepts_guard() {
        let row = transition::<u32, Kind>("Idle", Kind::Invite, "Idle")
            .when(|n: &u32, _: &Kind| *n > 2)
            .build()
            .unwrap();

        let guard = row.guard.unwrap();
        assert!(guard.evaluate(&3, &Kind::Invite));
        assert!(!guard.evaluate(&1, &Kind::Invite));
    }
}
