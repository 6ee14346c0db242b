//! The matchbox store: one weight vector per board state the agent has seen

use std::collections::BTreeMap;

use log::debug;

use super::matchbox::{DEFAULT_INITIAL_BEADS, Matchbox, WeightVector};
use crate::{
    Error, Result,
    tictactoe::{Board, StateKey},
};

/// Mapping exchanged with persistence: state key to bead counts.
pub type MatchboxMap = BTreeMap<StateKey, WeightVector>;

/// All matchboxes, keyed by board state.
///
/// Entries are created lazily the first time the agent has to move from a
/// state and are never removed; learning only changes their bead counts.
#[derive(Debug, Clone)]
pub struct MatchboxStore {
    boxes: BTreeMap<StateKey, Matchbox>,
    initial_beads: u32,
}

impl MatchboxStore {
    pub fn new() -> Self {
        Self::with_initial_beads(DEFAULT_INITIAL_BEADS)
    }

    pub fn with_initial_beads(initial_beads: u32) -> Self {
        Self {
            boxes: BTreeMap::new(),
            initial_beads,
        }
    }

    pub fn initial_beads(&self) -> u32 {
        self.initial_beads
    }

    /// Fetch the matchbox for `key`, opening it from `board` if it does not
    /// exist yet.
    ///
    /// `board` must be the board `key` was encoded from. An existing entry is
    /// returned as-is, including any learning applied to it.
    pub fn get_or_create(&mut self, key: StateKey, board: &Board) -> &mut Matchbox {
        let initial_beads = self.initial_beads;
        self.boxes.entry(key).or_insert_with(|| {
            debug!("opening matchbox {key}");
            Matchbox::new(board, initial_beads)
        })
    }

    pub fn get(&self, key: StateKey) -> Option<&Matchbox> {
        self.boxes.get(&key)
    }

    pub fn contains(&self, key: StateKey) -> bool {
        self.boxes.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateKey, &Matchbox)> + '_ {
        self.boxes.iter().map(|(&key, matchbox)| (key, matchbox))
    }

    /// Number of matchboxes with no beads left.
    pub fn dead_ends(&self) -> usize {
        self.boxes.values().filter(|m| m.is_dead_end()).count()
    }

    /// Add `delta` beads to `cell` in the matchbox for `key`, never going
    /// below zero.
    ///
    /// # Errors
    ///
    /// Fails if the matchbox was never opened or `cell` is off the board.
    pub fn adjust(&mut self, key: StateKey, cell: usize, delta: i32) -> Result<()> {
        let matchbox = self
            .boxes
            .get_mut(&key)
            .ok_or(Error::UnknownMatchbox { key })?;
        if !matchbox.reinforce(cell, delta) {
            return Err(Error::InvalidPosition { position: cell });
        }
        Ok(())
    }

    /// Replace every matchbox with the contents of `mapping`.
    ///
    /// Each entry must name a real board and carry no beads on that board's
    /// occupied cells. On error the store is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptedStore`] for the first malformed entry.
    pub fn load(&mut self, mapping: MatchboxMap) -> Result<()> {
        let mut boxes = BTreeMap::new();
        for (key, beads) in mapping {
            let board = key.decode().ok_or_else(|| Error::CorruptedStore {
                key: key.value(),
                reason: "key does not encode a 3x3 board".to_string(),
            })?;
            if let Some(pos) = (0..9).find(|&pos| !board.is_empty(pos) && beads[pos] != 0) {
                return Err(Error::CorruptedStore {
                    key: key.value(),
                    reason: format!("occupied cell {pos} holds {} beads", beads[pos]),
                });
            }
            boxes.insert(key, Matchbox::from_beads(beads));
        }
        debug!("loaded {} matchboxes", boxes.len());
        self.boxes = boxes;
        Ok(())
    }

    /// Copy every matchbox out for persistence.
    pub fn export(&self) -> MatchboxMap {
        self.boxes
            .iter()
            .map(|(&key, matchbox)| (key, *matchbox.beads()))
            .collect()
    }
}

impl Default for MatchboxStore {
    fn default() -> Self {
        Self::new()
    }
}
