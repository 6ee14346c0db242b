//! MENACE (Matchbox Educable Noughts And Crosses Engine) implementation
//!
//! This crate provides:
//! - A tic-tac-toe board with base-3 state keys and outcome evaluation
//! - The MENACE agent: one matchbox of beads per board state it has seen,
//!   reinforced after every game
//! - Ports for persistence, move input and narration, with file, memory and
//!   console adapters
//! - A command-line driver for interactive play and batch training

pub mod adapters;
pub mod cli;
pub mod error;
pub mod menace;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
