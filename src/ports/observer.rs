//! Observer port - narration and progress reporting for games
//!
//! The engine and session report what happens through this trait instead of
//! printing, so quiet training and chatty interactive play share one code
//! path.

use crate::{
    Result,
    menace::{Record, Trail},
    tictactoe::{Board, Outcome, Side, StateKey},
};

/// Observer trait for monitoring play
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - only for batch training
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_turn(side, board)` before every move
///    - `on_matchbox(key)`, then `on_agent_move(cell)` or `on_dead_end(key)`
///      on the agent's turns
///    - `on_final_board(board)` once the game has a result
///    - `on_game_end(game_num, outcome, trail)` after feedback was applied
/// 3. `on_training_end(record)` - only for batch training
///
/// Every method does nothing by default.
pub trait GameObserver {
    /// Called once before a batch of training games.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the game within this session (0-based)
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called before `side` moves on `board`.
    fn on_turn(&mut self, _side: Side, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called when the agent opens (or reopens) the matchbox for `key`.
    fn on_matchbox(&mut self, _key: StateKey) -> Result<()> {
        Ok(())
    }

    /// Called after the agent drew `cell` from its matchbox.
    fn on_agent_move(&mut self, _cell: usize) -> Result<()> {
        Ok(())
    }

    /// Called when the matchbox for `key` had no beads left and the agent
    /// resigned.
    fn on_dead_end(&mut self, _key: StateKey) -> Result<()> {
        Ok(())
    }

    /// Called with the last board of a game that reached a result.
    fn on_final_board(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after a finished game was scored.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the completed game
    /// * `outcome` - Final outcome
    /// * `trail` - The agent's moves, already reinforced
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome, _trail: &Trail) -> Result<()> {
        Ok(())
    }

    /// Called once after a batch of training games.
    fn on_training_end(&mut self, _record: &Record) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl GameObserver for SilentObserver {}
