//! Post-game reinforcement of the matchboxes the agent drew from
//!
//! Classic MENACE adds beads for every move of a won game, fewer for a draw,
//! and takes one bead away for every move of a lost game.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{store::MatchboxStore, trail::Trail};
use crate::{Result, tictactoe::Outcome};

/// MENACE reinforcement values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementValues {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
}

impl Default for ReinforcementValues {
    fn default() -> Self {
        // MENACE's original values
        ReinforcementValues {
            win: 3,
            draw: 1,
            loss: -1,
        }
    }
}

/// A rule that turns a finished game into bead adjustments.
pub trait FeedbackRule {
    /// Beads added to each trail entry for `outcome` (negative removes).
    fn adjustment(&self, outcome: Outcome) -> i32;

    /// Apply [`adjustment`](Self::adjustment) to every `(state, cell)` in
    /// `trail` and to nothing else.
    ///
    /// # Errors
    ///
    /// Fails if the trail names a matchbox the store never opened.
    fn apply(&self, store: &mut MatchboxStore, outcome: Outcome, trail: &Trail) -> Result<()> {
        let adj = self.adjustment(outcome);
        if adj == 0 {
            return Ok(());
        }
        for entry in trail.iter() {
            store.adjust(entry.key, entry.cell, adj)?;
        }
        debug!("applied {adj:+} beads to {} matchboxes", trail.len());
        Ok(())
    }
}

/// Classic MENACE feedback with fixed reinforcement values
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicFeedback {
    reinforcement: ReinforcementValues,
}

impl ClassicFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reinforcement(reinforcement: ReinforcementValues) -> Self {
        Self { reinforcement }
    }

    pub fn reinforcement(&self) -> ReinforcementValues {
        self.reinforcement
    }
}

impl FeedbackRule for ClassicFeedback {
    fn adjustment(&self, outcome: Outcome) -> i32 {
        match outcome {
            Outcome::AgentWin => self.reinforcement.win,
            Outcome::Draw => self.reinforcement.draw,
            Outcome::HumanWin => self.reinforcement.loss,
            Outcome::InProgress => 0,
        }
    }
}
