//! Event identity used to key transition tables.

use std::fmt::Debug;

/// An event delivered to a state machine.
///
/// The identity returned by [`Event::id`] is the lookup key into each
/// state's transition table. Any payload the event carries is read by
/// actions and guards; the engine itself only looks at the identity.
///
/// The ordering of identities is the `Ord` impl of `Id`. To key tables with
/// a different ordering, wrap the identity in a newtype with its own `Ord`.
///
/// # Example
///
/// ```rust
/// use mealy::core::Event;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// enum Kind {
///     Invite,
///     Bye,
/// }
///
/// struct DialogEvent {
///     kind: Kind,
///     cseq: u32,
/// }
///
/// impl Event for DialogEvent {
///     type Id = Kind;
///
///     fn id(&self) -> Kind {
///         self.kind
///     }
/// }
///
/// let ev = DialogEvent { kind: Kind::Invite, cseq: 1 };
/// assert_eq!(ev.id(), Kind::Invite);
/// assert_eq!(ev.cseq, 1);
/// ```
pub trait Event {
    /// Identity type distinguishing one kind of event from another.
    type Id: Ord + Clone + Debug;

    /// The identity of this occurrence.
    fn id(&self) -> Self::Id;
}
