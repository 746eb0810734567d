//! Handles that refer to states owned by a state table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-owning reference to a state in a [`StateTable`](crate::machine::StateTable).
///
/// Ids are handed out by the table when a state is inserted and stay valid
/// for the table's lifetime. An id is only meaningful for the table that
/// issued it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its table.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position() {
        assert_eq!(StateId(3).index(), 3);
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(StateId(0).to_string(), "#0");
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&StateId(4)).unwrap();
        assert_eq!(json, "4");
        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StateId(4));
    }
}
