//! Tic-Tac-Toe board, state keys and outcome evaluation

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Outcome, STATE_COUNT, Side, StateKey};
pub use lines::{LineAnalyzer, WINNING_LINES};
