//! Arena that owns every state of a machine.

use super::state::State;
use crate::builder::BuildError;
use crate::core::{Event, StateId};
use std::ops::{Index, IndexMut};

/// Owns the states of one machine and hands out [`StateId`]s for them.
///
/// Transitions refer to their targets by id, so states can point at each
/// other (including themselves) without shared ownership. Indexing with an
/// id issued by a different table panics, the same way slice indexing does.
pub struct StateTable<O, E: Event> {
    states: Vec<State<O, E>>,
}

impl<O, E: Event> StateTable<O, E> {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Take ownership of a state and return its id.
    pub fn insert(&mut self, state: State<O, E>) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    pub fn get(&self, id: StateId) -> Option<&State<O, E>> {
        self.states.get(id.0)
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut State<O, E>> {
        self.states.get_mut(id.0)
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.states.len()
    }

    /// Id of the first state with this name.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name() == name)
            .map(StateId)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State<O, E>)> + '_ {
        self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
    }

    /// Check that every transition targets a state in this table.
    pub fn validate(&self) -> Result<(), BuildError> {
        for state in &self.states {
            if let Some(target) = state.targets().find(|t| !self.contains(*t)) {
                return Err(BuildError::DanglingTarget {
                    state: state.name().to_string(),
                    target,
                });
            }
        }
        Ok(())
    }
}

impl<O, E: Event> Default for StateTable<O, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E: Event> Index<StateId> for StateTable<O, E> {
    type Output = State<O, E>;

    fn index(&self, id: StateId) -> &State<O, E> {
        &self.states[id.0]
    }
}

impl<O, E: Event> IndexMut<StateId> for StateTable<O, E> {
    fn index_mut(&mut self, id: StateId) -> &mut State<O, E> {
        &mut self.states[id.0]
    }
}

impl<O, E: Event> std::fmt::Debug for StateTable<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.states.iter()).finish()
    }
}
