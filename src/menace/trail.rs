//! The agent's moves in the current game

use serde::{Deserialize, Serialize};

use crate::tictactoe::StateKey;

/// One agent decision: the matchbox it drew from and the cell it played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailEntry {
    pub key: StateKey,
    pub cell: usize,
}

/// Ordered record of the agent's decisions in one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: StateKey, cell: usize) {
        self.entries.push(TrailEntry { key, cell });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailEntry> + '_ {
        self.entries.iter()
    }
}

impl FromIterator<(StateKey, usize)> for Trail {
    fn from_iter<I: IntoIterator<Item = (StateKey, usize)>>(iter: I) -> Self {
        Trail {
            entries: iter
                .into_iter()
                .map(|(key, cell)| TrailEntry { key, cell })
                .collect(),
        }
    }
}

impl std::fmt::Display for Trail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", entry.key.value(), entry.cell)?;
        }
        f.write_str("}")
    }
}
