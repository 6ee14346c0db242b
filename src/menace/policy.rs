//! Weighted-random move selection from a matchbox

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::matchbox::WeightVector;

/// What the agent draws from a matchbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Play at this cell.
    Cell(usize),
    /// The matchbox is empty; no move may be drawn.
    DeadEnd,
}

/// Draws one bead uniformly from a matchbox.
///
/// The weights are read as a row of beads ordered by cell, `weights[0]` beads
/// for cell 0 first, then cell 1, and so on. A uniformly random bead is picked
/// from that row, so each cell is chosen in proportion to its count.
#[derive(Debug, Clone)]
pub struct MovePolicy<R = StdRng> {
    rng: R,
}

impl MovePolicy<StdRng> {
    /// Deterministic policy for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::seed_from_u64(rand::random::<u64>()))
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(value) => Self::seeded(value),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> MovePolicy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a move from `weights`, or report a dead end when no beads remain.
    pub fn choose(&mut self, weights: &WeightVector) -> Choice {
        let total: u64 = weights.iter().map(|&count| u64::from(count)).sum();
        if total == 0 {
            return Choice::DeadEnd;
        }
        let bead = self.rng.random_range(0..total);
        bead_at(weights, bead)
    }
}

/// Map the `bead`-th bead of the cell-ordered row to its cell.
///
/// Returns [`Choice::DeadEnd`] when `bead` is past the last bead, which
/// includes every bead of an empty matchbox.
pub fn bead_at(weights: &WeightVector, bead: u64) -> Choice {
    let mut remaining = bead;
    for (cell, &count) in weights.iter().enumerate() {
        let count = u64::from(count);
        if remaining < count {
            return Choice::Cell(cell);
        }
        remaining -= count;
    }
    Choice::DeadEnd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        menace::{
            ClassicFeedback, FeedbackRule, Matchbox, MatchboxStore, ReinforcementValues, Trail,
        },
        tictactoe::{Board, Outcome},
    };

    #[test]
    fn first_bead_of_fresh_matchbox_is_cell_zero() {
        let fresh = Matchbox::new(&Board::new(), 10);
        assert_eq!(bead_at(fresh.beads(), 0), Choice::Cell(0));
    }

    #[test]
    fn bead_at_walks_cells_in_order() {
        let weights = [0, 2, 0, 0, 1, 0, 0, 0, 3];
        assert_eq!(bead_at(&weights, 0), Choice::Cell(1));
        assert_eq!(bead_at(&weights, 1), Choice::Cell(1));
        assert_eq!(bead_at(&weights, 2), Choice::Cell(4));
        assert_eq!(bead_at(&weights, 3), Choice::Cell(8));
        assert_eq!(bead_at(&weights, 5), Choice::Cell(8));
        assert_eq!(bead_at(&weights, 6), Choice::DeadEnd);
    }

    #[test]
    fn saturated_cell_beside_other_beads() {
        let mut store = MatchboxStore::new();
        let board = Board::new();
        let key = board.encode();
        store.get_or_create(key, &board);
        let trail: Trail = [(key, 0)].into_iter().collect();
        let rule = ClassicFeedback::with_reinforcement(ReinforcementValues {
            win: i32::MAX,
            draw: 1,
            loss: -1,
        });
        rule.apply(&mut store, Outcome::AgentWin, &trail).unwrap();
        rule.apply(&mut store, Outcome::AgentWin, &trail).unwrap();

        let weights = *store.get(key).unwrap().beads();
        assert_eq!(weights[0], u32::MAX);
        assert_eq!(bead_at(&weights, u64::from(u32::MAX) - 1), Choice::Cell(0));
        assert_eq!(bead_at(&weights, u64::from(u32::MAX)), Choice::Cell(1));
        assert_eq!(bead_at(&weights, u64::from(u32::MAX) + 80), Choice::Cell(8));

        let mut policy = MovePolicy::seeded(1);
        for _ in 0..100 {
            assert!(matches!(policy.choose(&weights), Choice::Cell(_)));
        }
    }

    #[test]
    fn empty_matchbox_is_dead_end() {
        let mut policy = MovePolicy::seeded(1);
        assert_eq!(policy.choose(&[0; 9]), Choice::DeadEnd);
    }

    #[test]
    fn never_picks_zero_weight_cell() {
        let mut policy = MovePolicy::seeded(7);
        let weights = [0, 0, 5, 0, 0, 0, 1, 0, 0];
        for _ in 0..500 {
            match policy.choose(&weights) {
                Choice::Cell(cell) => assert!(cell == 2 || cell == 6),
                Choice::DeadEnd => panic!("non-empty matchbox reported dead end"),
            }
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let weights = [10; 9];
        let mut a = MovePolicy::seeded(99);
        let mut b = MovePolicy::seeded(99);
        let first: Vec<Choice> = (0..20).map(|_| a.choose(&weights)).collect();
        let second: Vec<Choice> = (0..20).map(|_| b.choose(&weights)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn heavier_cell_is_chosen_more_often() {
        let mut policy = MovePolicy::seeded(3);
        let weights = [90, 10, 0, 0, 0, 0, 0, 0, 0];
        let heavy = (0..2000)
            .filter(|_| policy.choose(&weights) == Choice::Cell(0))
            .count();
        assert!(heavy > 1600, "expected ~1800 draws of cell 0, got {heavy}");
    }
}
