//! States and their transition tables.

use super::transition::Transition;
use crate::core::{Action, Event, Guard, StateId};
use std::collections::BTreeMap;

/// A named state with entry and exit hooks and a transition table.
///
/// The table maps an event identity to the transitions registered for it,
/// in registration order. Several transitions may share one identity; their
/// guards decide which one is taken, and earlier registrations win.
///
/// # Example
///
/// ```rust
/// use mealy::core::{Action, Event, Guard};
/// use mealy::machine::{State, StateTable};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// struct Ping;
///
/// impl Event for Ping {
///     type Id = Ping;
///     fn id(&self) -> Ping {
///         Ping
///     }
/// }
///
/// let mut table: StateTable<u32, Ping> = StateTable::new();
/// let idle = table.insert(State::new("Idle"));
/// let busy = table.insert(State::new("Busy"));
///
/// table[idle]
///     .add(Ping, busy, Action::none(), Some(Guard::new(|n: &u32, _: &Ping| *n > 0)))
///     .add(Ping, idle, Action::new(|n: &mut u32, _: &Ping| *n += 1), None);
///
/// let candidates = table[idle].transitions_for(&Ping);
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[0].target(), busy);
/// ```
pub struct State<O, E: Event> {
    name: String,
    entry: Action<O, E>,
    exit: Action<O, E>,
    table: BTreeMap<E::Id, Vec<Transition<O, E>>>,
}

impl<O, E: Event> State<O, E> {
    /// Create a state with no-op entry and exit hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: Action::none(),
            exit: Action::none(),
            table: BTreeMap::new(),
        }
    }

    /// Set the entry hook.
    pub fn on_entry<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut O, &E) + Send + Sync + 'static,
    {
        self.entry = Action::new(handler);
        self
    }

    /// Set the exit hook.
    pub fn on_exit<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut O, &E) + Send + Sync + 'static,
    {
        self.exit = Action::new(handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a transition for `event`.
    ///
    /// Later registrations for the same identity are tried after earlier
    /// ones. There is no way to remove or reorder entries.
    pub fn add(
        &mut self,
        event: E::Id,
        target: StateId,
        action: Action<O, E>,
        guard: Option<Guard<O, E>>,
    ) -> &mut Self {
        self.table
            .entry(event)
            .or_default()
            .push(Transition::new(target, action, guard));
        self
    }

    /// Candidates for `event` in registration order. Empty if unregistered.
    pub fn transitions_for(&self, event: &E::Id) -> &[Transition<O, E>] {
        self.table.get(event).map(Vec::as_slice).unwrap_or_default()
    }

    /// Identities that have at least one transition, in identity order.
    pub fn events(&self) -> impl Iterator<Item = &E::Id> + '_ {
        self.table.keys()
    }

    /// Total number of registered transitions across all identities.
    pub fn transition_count(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }

    pub(crate) fn targets(&self) -> impl Iterator<Item = StateId> + '_ {
        self.table.values().flatten().map(Transition::target)
    }

    pub fn enter(&self, owner: &mut O, event: &E) {
        self.entry.invoke(owner, event);
    }

    pub fn exit(&self, owner: &mut O, event: &E) {
        self.exit.invoke(owner, event);
    }
}

impl<O, E: Event> std::fmt::Debug for State<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("events", &self.table.keys().collect::<Vec<_>>())
            .field("transitions", &self.transition_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    enum Kind {
        Invite,
        Bye,
        Cancel,
    }

    impl Event for Kind {
        type Id = Kind;

        fn id(&self) -> Kind {
            *self
        }
    }

    #[derive(Default)]
    struct Trace {
        calls: Vec<&'static str>,
    }

    const IDLE: StateId = StateId(0);
    const BUSY: StateId = StateId(1);

    #[test]
    fn new_state_has_no_transitions() {
        let state: State<Trace, Kind> = State::new("Idle");

        assert_eq!(state.name(), "Idle");
        assert_eq!(state.transition_count(), 0);
        assert!(state.transitions_for(&Kind::Invite).is_empty());
        assert_eq!(state.events().count(), 0);
    }

    #[test]
    fn add_appends_in_registration_order() {
        let mut state: State<Trace, Kind> = State::new("Idle");
        state.add(Kind::Invite, BUSY, Action::none(), None);
        state.add(Kind::Invite, IDLE, Action::none(), None);

        let targets: Vec<StateId> = state
            .transitions_for(&Kind::Invite)
            .iter()
            .map(Transition::target)
            .collect();
        assert_eq!(targets, vec![BUSY, IDLE]);
    }

    #[test]
    fn buckets_are_independent() {
        let mut state: State<Trace, Kind> = State::new("Idle");
        state
            .add(Kind::Invite, BUSY, Action::none(), None)
            .add(Kind::Bye, IDLE, Action::none(), None)
            .add(Kind::Invite, IDLE, Action::none(), None);

        assert_eq!(state.transitions_for(&Kind::Invite).len(), 2);
        assert_eq!(state.transitions_for(&Kind::Bye).len(), 1);
        assert!(state.transitions_for(&Kind::Cancel).is_empty());
        assert_eq!(state.transition_count(), 3);
        assert_eq!(
            state.events().copied().collect::<Vec<_>>(),
            vec![Kind::Invite, Kind::Bye]
        );
    }

    #[test]
    fn hooks_default_to_noop() {
        let state: State<Trace, Kind> = State::new("Idle");
        let mut trace = Trace::default();

        state.enter(&mut trace, &Kind::Invite);
        state.exit(&mut trace, &Kind::Invite);

        assert!(trace.calls.is_empty());
    }

    #[test]
    fn hooks_invoke_handlers() {
        let state: State<Trace, Kind> = State::new("Idle")
            .on_entry(|t: &mut Trace, _: &Kind| t.calls.push("enter"))
            .on_exit(|t: &mut Trace, _: &Kind| t.calls.push("exit"));
        let mut trace = Trace::default();

        state.enter(&mut trace, &Kind::Bye);
        state.exit(&mut trace, &Kind::Bye);

        assert_eq!(trace.calls, vec!["enter", "exit"]);
    }

    #[test]
    fn targets_lists_every_transition() {
        let mut state: State<Trace, Kind> = State::new("Idle");
        state.add(Kind::Invite, BUSY, Action::none(), None);
        state.add(Kind::Bye, IDLE, Action::none(), None);

        let mut targets: Vec<StateId> = state.targets().collect();
        targets.sort();
        assert_eq!(targets, vec![IDLE, BUSY]);
    }
}
