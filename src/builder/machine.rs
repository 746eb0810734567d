//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::{TransitionBuilder, TransitionRow};
use crate::core::{Event, StateId};
use crate::machine::{MachineOptions, State, StateMachine, StateTable};
use std::collections::HashSet;

/// Builder for constructing state machines with a fluent API.
///
/// States are declared by value and transitions refer to them by name.
/// Rows are registered in declaration order, so for rows sharing a source
/// state and event the first declared is tried first.
pub struct StateMachineBuilder<O, E: Event> {
    states: Vec<State<O, E>>,
    initial: Option<String>,
    rows: Vec<TransitionRow<O, E>>,
    options: MachineOptions,
}

impl<O: 'static, E: Event + 'static> StateMachineBuilder<O, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            rows: Vec::new(),
            options: MachineOptions::default(),
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: State<O, E>) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states.
    pub fn states(mut self, states: impl IntoIterator<Item = State<O, E>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<O, E>) -> Result<Self, BuildError> {
        self.rows.push(builder.build()?);
        Ok(self)
    }

    /// Add pre-built rows.
    pub fn transitions(mut self, rows: impl IntoIterator<Item = TransitionRow<O, E>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn options(mut self, options: MachineOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve names and produce the state table and start state id.
    pub fn build_table(self) -> Result<(StateTable<O, E>, StateId), BuildError> {
        let (table, start, _) = self.resolve()?;
        Ok((table, start))
    }

    /// Build a stopped machine that drives `owner`.
    pub fn build(self, owner: O) -> Result<StateMachine<O, E>, BuildError> {
        let (table, start, options) = self.resolve()?;
        StateMachine::with_options(owner, table, start, options)
    }

    fn resolve(self) -> Result<(StateTable<O, E>, StateId, MachineOptions), BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut seen = HashSet::new();
        let mut table = StateTable::new();
        for state in self.states {
            if !seen.insert(state.name().to_string()) {
                return Err(BuildError::DuplicateState(state.name().to_string()));
            }
            table.insert(state);
        }

        let lookup = |table: &StateTable<O, E>, name: &str| {
            table
                .find(name)
                .ok_or_else(|| BuildError::UnknownState(name.to_string()))
        };

        let start = lookup(&table, &initial)?;
        for row in self.rows {
            let from = lookup(&table, &row.from)?;
            let to = lookup(&table, &row.to)?;
            table[from].add(row.event, to, row.action, row.guard);
        }

        Ok((table, start, self.options))
    }
}

impl<O: 'static, E: Event + 'static> Default for StateMachineBuilder<O, E> {
    fn default() -> Self {
        Self::new()
    }
}
