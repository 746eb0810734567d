//! A single candidate transition inside a state's table.

use crate::core::{Action, Guard, StateId};

/// Target state, action and optional guard for one table entry.
///
/// Transitions are created through [`State::add`](super::State::add) only;
/// there is no public constructor. A transition is immutable once added.
pub struct Transition<O, E> {
    target: StateId,
    action: Action<O, E>,
    guard: Option<Guard<O, E>>,
}

impl<O, E> Transition<O, E> {
    pub(super) fn new(target: StateId, action: Action<O, E>, guard: Option<Guard<O, E>>) -> Self {
        Self {
            target,
            action,
            guard,
        }
    }

    /// The state this transition leads to.
    pub fn target(&self) -> StateId {
        self.target
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// True if there is no guard or the guard passes. Never runs the action.
    pub fn is_eligible(&self, owner: &O, event: &E) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|guard| guard.evaluate(owner, event))
    }

    /// Re-check eligibility and, if eligible, run the action once and
    /// return the target. Returns `None` without side effects otherwise.
    pub fn attempt(&self, owner: &mut O, event: &E) -> Option<StateId> {
        if !self.is_eligible(owner, event) {
            return None;
        }
        self.action.invoke(owner, event);
        Some(self.target)
    }
}

impl<O, E> std::fmt::Debug for Transition<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("action", &self.action)
            .field("guard", &self.guard)
            .finish()
    }
}
