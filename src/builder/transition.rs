//! Builder for individual transition rows.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, Guard};

/// A validated transition row, with states referenced by name.
pub struct TransitionRow<O, E: Event> {
    pub from: String,
    pub event: E::Id,
    pub to: String,
    pub action: Action<O, E>,
    pub guard: Option<Guard<O, E>>,
}

/// Builder for transition rows with a fluent API.
pub struct TransitionBuilder<O, E: Event> {
    from: Option<String>,
    event: Option<E::Id>,
    to: Option<String>,
    action: Action<O, E>,
    guard: Option<Guard<O, E>>,
}

impl<O: 'static, E: Event + 'static> TransitionBuilder<O, E> {
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            action: Action::none(),
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the triggering event identity (required).
    pub fn on(mut self, event: E::Id) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Set the transition action. Defaults to a no-op.
    pub fn action<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut O, &E) + Send + Sync + 'static,
    {
        self.action = Action::new(handler);
        self
    }

    /// Add a guard predicate. Repeated calls must all pass.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&O, &E) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Add a prebuilt guard. Repeated calls must all pass.
    pub fn guard(mut self, guard: Guard<O, E>) -> Self {
        self.guard = Some(match self.guard.take() {
            Some(existing) => existing.and(guard),
            None => guard,
        });
        self
    }

    /// Build the row, validating that all required fields are set.
    pub fn build(self) -> Result<TransitionRow<O, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(TransitionRow {
            from,
            event,
            to,
            action: self.action,
            guard: self.guard,
        })
    }
}

impl<O: 'static, E: Event + 'static> Default for TransitionBuilder<O, E> {
    fn default() -> Self {
        Self::new()
    }
}
