//! Common test utilities for the menace test suite.

#![allow(dead_code)]

use std::collections::VecDeque;

use menace::{
    Result,
    menace::Trail,
    ports::{GameObserver, MoveRequest, MoveSource},
    tictactoe::{Board, Outcome, StateKey},
};

/// Move source that replays a fixed list of requests, then quits.
pub struct ScriptedSource {
    moves: VecDeque<MoveRequest>,
}

impl ScriptedSource {
    pub fn cells(cells: &[usize]) -> Self {
        Self {
            moves: cells.iter().map(|&cell| MoveRequest::Cell(cell)).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self, _board: &Board) -> Result<MoveRequest> {
        Ok(self.moves.pop_front().unwrap_or(MoveRequest::Quit))
    }
}

/// Move source that always takes the lowest empty cell.
pub struct FirstEmptySource;

impl MoveSource for FirstEmptySource {
    fn next_move(&mut self, board: &Board) -> Result<MoveRequest> {
        Ok(board
            .empty_positions()
            .first()
            .map_or(MoveRequest::Quit, |&cell| MoveRequest::Cell(cell)))
    }
}

/// Observer that keeps every event it is shown.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub matchboxes: Vec<StateKey>,
    pub agent_moves: Vec<usize>,
    pub dead_ends: Vec<StateKey>,
    pub results: Vec<(usize, Outcome, Trail)>,
}

impl GameObserver for RecordingObserver {
    fn on_matchbox(&mut self, key: StateKey) -> Result<()> {
        self.matchboxes.push(key);
        Ok(())
    }

    fn on_agent_move(&mut self, cell: usize) -> Result<()> {
        self.agent_moves.push(cell);
        Ok(())
    }

    fn on_dead_end(&mut self, key: StateKey) -> Result<()> {
        self.dead_ends.push(key);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome, trail: &Trail) -> Result<()> {
        self.results.push((game_num, outcome, trail.clone()));
        Ok(())
    }
}
