//! Console observers: per-move narration and a training progress bar

use std::io::{Stdout, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error, Result,
    menace::{Record, Trail},
    ports::GameObserver,
    tictactoe::{Board, Outcome, Side, StateKey},
};

/// Narrates interactive games the way a person sitting across the table would
/// want to see them: the board before each of their moves, which matchbox
/// MENACE opened, what it drew and how the game ended.
pub struct ConsoleNarrator<W = Stdout> {
    out: W,
}

impl ConsoleNarrator<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|source| Error::Io {
            operation: "write narration".to_string(),
            source,
        })
    }
}

impl<W: Write> GameObserver for ConsoleNarrator<W> {
    fn on_turn(&mut self, side: Side, board: &Board) -> Result<()> {
        if side == Side::Human {
            self.line(board)?;
            self.line("Enter a board pos")?;
        }
        Ok(())
    }

    fn on_matchbox(&mut self, key: StateKey) -> Result<()> {
        self.line(format_args!("Getting matchbox {key}..."))
    }

    fn on_agent_move(&mut self, cell: usize) -> Result<()> {
        self.line(format_args!("MENACE chose: {cell}"))
    }

    fn on_dead_end(&mut self, _key: StateKey) -> Result<()> {
        self.line("Dead end")
    }

    fn on_final_board(&mut self, board: &Board) -> Result<()> {
        self.line(board)
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: Outcome, trail: &Trail) -> Result<()> {
        let verdict = match outcome {
            Outcome::HumanWin => "You won",
            Outcome::AgentWin => "MENACE won",
            Outcome::Draw => "It's a draw",
            Outcome::InProgress => return Ok(()),
        };
        self.line(verdict)?;
        self.line("MENACE's moves:")?;
        self.line(trail)?;
        self.line("------New Game------")
    }
}

/// Progress observer - shows a progress bar with the running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    record: Record,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            record: Record::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "W:{} L:{} D:{}",
            self.record.wins, self.record.losses, self.record.draws
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome, _trail: &Trail) -> Result<()> {
        self.record.tally(outcome);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self, _record: &Record) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}
