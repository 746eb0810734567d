//! State machine that drives an owned object through a state table.

use super::error::MachineError;
use super::options::MachineOptions;
use super::run_state::RunState;
use super::state::State;
use super::table::StateTable;
use crate::builder::BuildError;
use crate::core::{Event, StateHistory, StateId, TransitionRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

/// Result of posting an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A transition was taken
    Processed { from: StateId, to: StateId },

    /// The current state has no eligible transition for the event
    Ignored,

    /// The machine is stopped; the event was not looked at
    NotRunning,
}

impl Outcome {
    /// True if a transition was taken.
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }
}

/// Point-in-time view of a machine for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub name: String,
    pub run_state: RunState,
    pub current: StateId,
    pub current_name: String,
    pub start: StateId,
    pub start_name: String,
    pub transitions_taken: u64,
}

impl MachineSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Table-driven Mealy machine bound to a driven object.
///
/// The machine owns the driven object and the [`StateTable`]. Handing the
/// table over ends configuration: it cannot be changed afterwards.
///
/// Processing is synchronous. Hooks receive `&mut O`, never the machine,
/// so an action cannot post an event back into the machine that is running
/// it. Hosts that receive events on several threads must funnel them
/// through a single consumer.
///
/// # Example
///
/// ```rust
/// use mealy::core::{Action, Event};
/// use mealy::machine::{Outcome, State, StateMachine, StateTable};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// enum Signal {
///     Connect,
///     Drop,
/// }
///
/// impl Event for Signal {
///     type Id = Signal;
///     fn id(&self) -> Signal {
///         *self
///     }
/// }
///
/// let mut table: StateTable<Vec<&'static str>, Signal> = StateTable::new();
/// let down = table.insert(State::new("Down"));
/// let up = table.insert(State::new("Up").on_entry(|log: &mut Vec<&str>, _: &Signal| log.push("up")));
/// table[down].add(Signal::Connect, up, Action::none(), None);
/// table[up].add(Signal::Drop, down, Action::none(), None);
///
/// let mut machine = StateMachine::new(Vec::new(), table, down).unwrap();
/// machine.start().unwrap();
///
/// assert_eq!(
///     machine.post_event(&Signal::Connect).unwrap(),
///     Outcome::Processed { from: down, to: up }
/// );
/// assert_eq!(machine.post_event(&Signal::Connect).unwrap(), Outcome::Ignored);
/// assert_eq!(machine.owner(), &vec!["up"]);
/// ```
pub struct StateMachine<O, E: Event> {
    owner: O,
    table: StateTable<O, E>,
    start: StateId,
    current: StateId,
    run_state: RunState,
    options: MachineOptions,
    history: Option<StateHistory<E::Id>>,
    transitions_taken: u64,
}

impl<O, E: Event> StateMachine<O, E> {
    /// Create a stopped machine positioned at `start`.
    pub fn new(owner: O, table: StateTable<O, E>, start: StateId) -> Result<Self, BuildError> {
        Self::with_options(owner, table, start, MachineOptions::default())
    }

    pub fn with_options(
        owner: O,
        table: StateTable<O, E>,
        start: StateId,
        options: MachineOptions,
    ) -> Result<Self, BuildError> {
        if !table.contains(start) {
            return Err(BuildError::UnknownStartState(start));
        }
        table.validate()?;

        Ok(Self {
            owner,
            table,
            start,
            current: start,
            run_state: RunState::Stopped,
            history: options.new_history(),
            options,
            transitions_taken: 0,
        })
    }

    /// Stopped -> Running.
    pub fn start(&mut self) -> Result<(), MachineError> {
        if self.run_state != RunState::Stopped {
            return Err(self.invalid_run_state("start"));
        }
        self.run_state = RunState::Running;
        debug!(machine = %self.options.name, state = self.current().name(), "machine started");
        Ok(())
    }

    /// Running -> Stopped.
    pub fn halt(&mut self) -> Result<(), MachineError> {
        if self.run_state != RunState::Running {
            return Err(self.invalid_run_state("halt"));
        }
        self.run_state = RunState::Stopped;
        debug!(machine = %self.options.name, state = self.current().name(), "machine halted");
        Ok(())
    }

    /// Return to the start state. Only allowed while stopped.
    ///
    /// No hooks run. History and the transition counter are cleared.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        if self.run_state != RunState::Stopped {
            return Err(self.invalid_run_state("reset"));
        }
        self.current = self.start;
        self.transitions_taken = 0;
        if let Some(history) = &mut self.history {
            history.clear();
        }
        debug!(machine = %self.options.name, state = self.current().name(), "machine reset");
        Ok(())
    }

    /// Process one event.
    ///
    /// Candidates for the event's identity are scanned in registration
    /// order. If none is eligible the event is ignored and no hook runs.
    /// Otherwise the current state's exit hook runs, the first eligible
    /// candidate's action runs, and the target's entry hook runs, in that
    /// order.
    ///
    /// The only error is [`MachineError::InternalConsistencyViolation`]:
    /// a candidate was eligible during the scan but refused during the
    /// commit pass. The exit hook has already run at that point, so the
    /// machine halts in its current state and must be reset before use.
    pub fn post_event(&mut self, event: &E) -> Result<Outcome, MachineError> {
        if self.run_state != RunState::Running {
            trace!(machine = %self.options.name, "event posted to stopped machine");
            return Ok(Outcome::NotRunning);
        }

        let id = event.id();
        let from = self.current;
        let state = &self.table[from];
        let candidates = state.transitions_for(&id);

        if !candidates.iter().any(|t| t.is_eligible(&self.owner, event)) {
            trace!(
                machine = %self.options.name,
                state = state.name(),
                event = ?id,
                registered = candidates.len(),
                "event ignored"
            );
            return Ok(Outcome::Ignored);
        }

        state.exit(&mut self.owner, event);

        let owner = &mut self.owner;
        let Some(to) = candidates.iter().find_map(|t| t.attempt(owner, event)) else {
            error!(
                machine = %self.options.name,
                state = state.name(),
                event = ?id,
                "eligible transition produced no target, halting"
            );
            let err = MachineError::InternalConsistencyViolation {
                state: state.name().to_string(),
                event: format!("{id:?}"),
            };
            self.run_state = RunState::Stopped;
            return Err(err);
        };

        self.current = to;
        self.table[to].enter(&mut self.owner, event);
        self.transitions_taken += 1;

        debug!(
            machine = %self.options.name,
            from = self.table[from].name(),
            to = self.table[to].name(),
            event = ?id,
            "transition taken"
        );
        if let Some(history) = &mut self.history {
            history.record(TransitionRecord::now(from, to, id));
        }

        Ok(Outcome::Processed { from, to })
    }

    /// Process one event, treating anything but a taken transition as an error.
    ///
    /// Returns the new current state.
    pub fn try_post_event(&mut self, event: &E) -> Result<StateId, MachineError> {
        match self.post_event(event)? {
            Outcome::Processed { to, .. } => Ok(to),
            Outcome::Ignored => Err(MachineError::NoMatchingTransition {
                state: self.current().name().to_string(),
                event: format!("{:?}", event.id()),
            }),
            Outcome::NotRunning => Err(self.invalid_run_state("post an event")),
        }
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// The current state.
    pub fn current(&self) -> &State<O, E> {
        &self.table[self.current]
    }

    pub fn start_state(&self) -> StateId {
        self.start
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn table(&self) -> &StateTable<O, E> {
        &self.table
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// Mutable access to the driven object between events.
    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    pub fn into_owner(self) -> O {
        self.owner
    }

    /// Transition journal, when enabled in [`MachineOptions`].
    pub fn history(&self) -> Option<&StateHistory<E::Id>> {
        self.history.as_ref()
    }

    pub fn transitions_taken(&self) -> u64 {
        self.transitions_taken
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            name: self.options.name.clone(),
            run_state: self.run_state,
            current: self.current,
            current_name: self.current().name().to_string(),
            start: self.start,
            start_name: self.table[self.start].name().to_string(),
            transitions_taken: self.transitions_taken,
        }
    }

    fn invalid_run_state(&self, operation: &'static str) -> MachineError {
        debug!(
            machine = %self.options.name,
            operation,
            run_state = %self.run_state,
            "operation rejected"
        );
        MachineError::InvalidRunState {
            operation,
            run_state: self.run_state,
        }
    }
}
