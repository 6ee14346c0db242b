//! Win/loss/draw tally kept across sessions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Outcome;

/// Games won, lost and drawn, counted from MENACE's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game. Unfinished outcomes are ignored.
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::AgentWin => self.wins += 1,
            Outcome::HumanWin => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u64 {
        self.wins + self.losses + self.draws
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {} Losses: {} Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome() {
        let mut record = Record::new();
        record.tally(Outcome::AgentWin);
        record.tally(Outcome::AgentWin);
        record.tally(Outcome::HumanWin);
        record.tally(Outcome::Draw);
        record.tally(Outcome::InProgress);

        assert_eq!(
            record,
            Record {
                wins: 2,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(record.games(), 4);
        assert_eq!(record.to_string(), "Wins: 2 Losses: 1 Draws: 1");
    }
}
