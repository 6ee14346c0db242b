//! Random move source used to generate training games

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    Error, Result,
    ports::{MoveRequest, MoveSource},
    tictactoe::Board,
};

/// Plays a uniformly random empty cell. Never quits.
#[derive(Debug, Clone)]
pub struct RandomMoveSource {
    rng: StdRng,
}

impl RandomMoveSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::seeded(seed.unwrap_or_else(rand::random::<u64>))
    }
}

impl MoveSource for RandomMoveSource {
    fn next_move(&mut self, board: &Board) -> Result<MoveRequest> {
        let moves = board.empty_positions();
        moves
            .choose(&mut self.rng)
            .copied()
            .map(MoveRequest::Cell)
            .ok_or(Error::NoValidMoves)
    }
}
