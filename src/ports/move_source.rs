//! Move source port - where the human side's moves come from

use crate::{Result, tictactoe::Board};

/// A move request from the human side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    /// Play at this empty cell.
    Cell(usize),
    /// End the session; the driver flushes persistence and returns.
    Quit,
}

/// Supplies moves for the human side of a game.
///
/// Implementations validate their own input: a returned
/// [`MoveRequest::Cell`] is always an empty cell of `board`.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board) -> Result<MoveRequest>;
}

impl<M: MoveSource + ?Sized> MoveSource for &mut M {
    fn next_move(&mut self, board: &Board) -> Result<MoveRequest> {
        (**self).next_move(board)
    }
}
