//! Transition history tracking.
//!
//! Keeps a journal of the transitions a machine has taken, oldest first.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single taken transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<I> {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// Identity of the event that caused the transition
    pub event: I,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<I> TransitionRecord<I> {
    /// Record a transition stamped with the current time.
    pub fn now(from: StateId, to: StateId, event: I) -> Self {
        Self {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered journal of taken transitions.
///
/// A history created with [`StateHistory::bounded`] keeps at most that many
/// records and drops the oldest first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<I> {
    records: VecDeque<TransitionRecord<I>>,
    limit: Option<usize>,
}

impl<I> Default for StateHistory<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> StateHistory<I> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a history that retains at most `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(64)),
            limit: Some(limit),
        }
    }

    /// Append a record, evicting the oldest one when the limit is reached.
    pub fn record(&mut self, record: TransitionRecord<I>) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.records.len() >= limit {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of each record.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time between the oldest and newest retained record, or `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate retained records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionRecord<I>> + '_ {
        self.records.iter()
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&TransitionRecord<I>> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
