//! Matchbox implementation for MENACE

use serde::{Deserialize, Serialize};

use crate::tictactoe::Board;

/// Bead counts for each of the nine cells, indexed by position.
pub type WeightVector = [u32; 9];

/// Beads placed on every empty cell when a matchbox is first opened.
pub const DEFAULT_INITIAL_BEADS: u32 = 10;

/// A matchbox containing beads for a specific board state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matchbox {
    beads: WeightVector,
}

impl Matchbox {
    /// Open a matchbox for `board`: `initial_beads` on each empty cell, none
    /// on occupied cells.
    pub fn new(board: &Board, initial_beads: u32) -> Self {
        let mut beads = [0; 9];
        for pos in board.empty_positions() {
            beads[pos] = initial_beads;
        }
        Matchbox { beads }
    }

    pub fn from_beads(beads: WeightVector) -> Self {
        Matchbox { beads }
    }

    pub fn beads(&self) -> &WeightVector {
        &self.beads
    }

    /// Get the bead count for a specific position
    pub fn bead_count(&self, position: usize) -> Option<u32> {
        self.beads.get(position).copied()
    }

    /// Get total bead count
    pub fn total_beads(&self) -> u64 {
        self.beads.iter().map(|&count| u64::from(count)).sum()
    }

    /// Whether every bead has been taken out of the box
    pub fn is_dead_end(&self) -> bool {
        self.total_beads() == 0
    }

    /// Add or remove beads for one position; counts never drop below zero.
    ///
    /// Returns `false` when `position` is off the board.
    pub fn reinforce(&mut self, position: usize, delta: i32) -> bool {
        let Some(count) = self.beads.get_mut(position) else {
            return false;
        };
        if delta >= 0 {
            *count = count.saturating_add(delta.unsigned_abs());
        } else {
            *count = count.saturating_sub(delta.unsigned_abs());
        }
        true
    }
}
