//! Runtime options for a state machine.

use crate::builder::BuildError;
use crate::core::StateHistory;
use serde::{Deserialize, Serialize};

/// Options controlling logging labels and history recording.
///
/// Every field has a default, so a partial document deserializes:
///
/// ```rust
/// use mealy::machine::MachineOptions;
///
/// let options = MachineOptions::from_json(r#"{ "name": "dialog-42", "record_history": true }"#).unwrap();
/// assert_eq!(options.name, "dialog-42");
/// assert!(options.record_history);
/// assert_eq!(options.history_limit, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Label attached to every log line the machine emits
    pub name: String,

    /// Keep a journal of taken transitions
    pub record_history: bool,

    /// Maximum number of journal entries kept; unbounded when `None`
    pub history_limit: Option<usize>,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            name: "fsm".to_string(),
            record_history: false,
            history_limit: None,
        }
    }
}

impl MachineOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Turn on history recording, optionally bounded.
    pub fn with_history(mut self, limit: Option<usize>) -> Self {
        self.record_history = true;
        self.history_limit = limit;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn new_history<I>(&self) -> Option<StateHistory<I>> {
        if !self.record_history {
            return None;
        }
        Some(match self.history_limit {
            Some(limit) => StateHistory::bounded(limit),
            None => StateHistory::new(),
        })
    }
}
