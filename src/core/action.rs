//! Side-effecting callbacks run on transitions and on state entry/exit.

/// Handler signature for a bound action.
pub type ActionFn<O, E> = dyn Fn(&mut O, &E) + Send + Sync;

enum Handler<O, E> {
    NoOp,
    Bound(Box<ActionFn<O, E>>),
}

/// A side effect invoked with the driven object and the triggering event.
///
/// Actions run on a taken transition, and as the entry or exit hook of a
/// state. The default action does nothing. Handlers must not panic; the
/// engine does not recover from a failing callback.
///
/// # Example
///
/// ```rust
/// use mealy::core::Action;
///
/// struct Counter {
///     hits: u32,
/// }
///
/// let bump: Action<Counter, u32> = Action::new(|c: &mut Counter, n: &u32| c.hits += n);
///
/// let mut counter = Counter { hits: 0 };
/// bump.invoke(&mut counter, &2);
/// assert_eq!(counter.hits, 2);
///
/// Action::none().invoke(&mut counter, &5);
/// assert_eq!(counter.hits, 2);
/// ```
pub struct Action<O, E> {
    handler: Handler<O, E>,
}

impl<O, E> Action<O, E> {
    /// The no-op action.
    pub fn none() -> Self {
        Self {
            handler: Handler::NoOp,
        }
    }

    /// Bind an action to a handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut O, &E) + Send + Sync + 'static,
    {
        Self {
            handler: Handler::Bound(Box::new(handler)),
        }
    }

    /// Run the action.
    pub fn invoke(&self, owner: &mut O, event: &E) {
        if let Handler::Bound(handler) = &self.handler {
            handler(owner, event);
        }
    }

    /// True for the no-op action.
    pub fn is_noop(&self) -> bool {
        matches!(self.handler, Handler::NoOp)
    }
}

impl<O, E> Default for Action<O, E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<O, E> std::fmt::Debug for Action<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.handler {
            Handler::NoOp => f.write_str("Action::None"),
            Handler::Bound(_) => f.write_str("Action::Bound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    #[test]
    fn none_does_nothing() {
        let action: Action<Recorder, &str> = Action::none();
        let mut rec = Recorder::default();

        action.invoke(&mut rec, &"invite");

        assert!(action.is_noop());
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn default_is_noop() {
        let action: Action<Recorder, &str> = Action::default();
        assert!(action.is_noop());
    }

    #[test]
    fn bound_action_receives_owner_and_event() {
        let action = Action::new(|rec: &mut Recorder, ev: &&str| rec.calls.push(ev.to_string()));
        let mut rec = Recorder::default();

        action.invoke(&mut rec, &"invite");
        action.invoke(&mut rec, &"bye");

        assert!(!action.is_noop());
        assert_eq!(rec.calls, vec!["invite", "bye"]);
    }

    #[test]
    fn debug_names_variant() {
        let none: Action<Recorder, ()> = Action::none();
        let bound: Action<Recorder, ()> = Action::new(|_, _| {});
        assert_eq!(format!("{none:?}"), "Action::None");
        assert_eq!(format!("{bound:?}"), "Action::Bound");
    }
}
