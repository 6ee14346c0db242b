//! Board state representation, state keys and outcome evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of distinct 9-cell boards over three marks (3^9).
pub const STATE_COUNT: u32 = 19_683;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Agent,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Human => 'H',
            Cell::Agent => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '_' | '.' | ' ' => Some(Cell::Empty),
            'H' | 'h' => Some(Cell::Human),
            'C' | 'c' | 'A' | 'a' => Some(Cell::Agent),
            _ => None,
        }
    }

    /// Base-3 digit used by the state key.
    pub fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Human => 1,
            Cell::Agent => 2,
        }
    }

    fn from_digit(digit: u32) -> Cell {
        match digit {
            1 => Cell::Human,
            2 => Cell::Agent,
            _ => Cell::Empty,
        }
    }

    /// The side owning this mark, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Human => Some(Side::Human),
            Cell::Agent => Some(Side::Agent),
            Cell::Empty => None,
        }
    }
}

/// One of the two participants in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Agent,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Agent,
            Side::Agent => Side::Human,
        }
    }

    /// The mark this side places on the board
    pub fn mark(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Agent => Cell::Agent,
        }
    }
}

/// Result of evaluating a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HumanWin,
    AgentWin,
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Outcome in which `side` has three in a row.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Human => Outcome::HumanWin,
            Side::Agent => Outcome::AgentWin,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::HumanWin => "human win",
            Outcome::AgentWin => "MENACE win",
            Outcome::Draw => "draw",
            Outcome::InProgress => "in progress",
        };
        f.write_str(text)
    }
}

/// Integer identifying a board configuration.
///
/// Each cell is a base-3 digit (Empty=0, Human=1, Agent=2) weighted by
/// `3^position`, so the key depends on cell contents only and never on the
/// order in which the board was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(u32);

impl StateKey {
    pub fn new(raw: u32) -> Self {
        StateKey(raw)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether the key lies inside the `0..3^9` range of real boards.
    pub fn is_valid(self) -> bool {
        self.0 < STATE_COUNT
    }

    /// Reconstruct the board this key was encoded from.
    ///
    /// Returns `None` for keys outside `0..3^9`.
    pub fn decode(self) -> Option<Board> {
        if !self.is_valid() {
            return None;
        }
        let mut rest = self.0;
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = Cell::from_digit(rest % 3);
            rest /= 3;
        }
        Some(Board { cells })
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The nine cells of a game in progress
///
/// Positions are numbered row by row:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a string such as `"HC_ _H_ C__"`.
    ///
    /// Whitespace is ignored; exactly the first nine cell characters are used.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 characters remain or any character is
    /// not a cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place `side`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Fails if `pos` is off the board or already occupied; the board is left
    /// unchanged.
    pub fn place(&mut self, pos: usize, side: Side) -> Result<(), crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = side.mark();
        Ok(())
    }

    /// Encode the board as its state key
    pub fn encode(&self) -> StateKey {
        let raw = self
            .cells
            .iter()
            .rev()
            .fold(0u32, |acc, cell| acc * 3 + cell.digit());
        StateKey(raw)
    }

    /// Evaluate the board: a completed line wins, else a full board draws.
    pub fn evaluate(&self) -> Outcome {
        if let Some(side) = LineAnalyzer::winner(&self.cells) {
            return Outcome::win_for(side);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let base = row * 3;
            writeln!(
                f,
                "{} {} {}\t {} {} {}",
                self.cells[base].to_char(),
                self.cells[base + 1].to_char(),
                self.cells[base + 2].to_char(),
                base,
                base + 1,
                base + 2,
            )?;
        }
        Ok(())
    }
}
