//! Keyboard move source for interactive play

use std::io::{BufRead, StdinLock, Stdout, Write};

use crate::{
    Error, Result,
    ports::{MoveRequest, MoveSource},
    tictactoe::Board,
};

/// Word that ends the session from the move prompt.
pub const QUIT_COMMAND: &str = "quit";

/// Parse one line of human input against `board`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for anything that is not `quit` or the
/// index of an empty cell.
pub fn parse_move(line: &str, board: &Board) -> Result<MoveRequest> {
    let input = line.trim();
    if input == QUIT_COMMAND {
        return Ok(MoveRequest::Quit);
    }
    let invalid = |reason: &str| Error::InvalidInput {
        input: input.to_string(),
        reason: reason.to_string(),
    };
    let pos: usize = input.parse().map_err(|_| invalid("Invalid input"))?;
    if pos >= 9 {
        return Err(invalid("Invalid input"));
    }
    if !board.is_empty(pos) {
        return Err(invalid("Position already taken"));
    }
    Ok(MoveRequest::Cell(pos))
}

/// Reads moves line by line, re-prompting until the input is a legal cell.
///
/// End of input is treated like `quit`.
pub struct ConsoleMoveSource<R, W> {
    input: R,
    output: W,
    quiet: bool,
}

impl ConsoleMoveSource<StdinLock<'static>, Stdout> {
    /// Move source on the process's stdin and stdout.
    pub fn stdio(quiet: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), quiet)
    }
}

impl<R: BufRead, W: Write> ConsoleMoveSource<R, W> {
    /// With `quiet` set the prompt and retry messages are not printed.
    pub fn new(input: R, output: W, quiet: bool) -> Self {
        Self {
            input,
            output,
            quiet,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str, newline: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let written = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}")
        };
        written
            .and_then(|_| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write to console".to_string(),
                source,
            })
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoveSource<R, W> {
    fn next_move(&mut self, board: &Board) -> Result<MoveRequest> {
        loop {
            self.say("> ", false)?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|source| Error::Io {
                    operation: "read move from console".to_string(),
                    source,
                })?;
            if read == 0 {
                return Ok(MoveRequest::Quit);
            }
            match parse_move(&line, board) {
                Ok(request) => return Ok(request),
                Err(Error::InvalidInput { reason, .. }) => self.say(&reason, true)?,
                Err(other) => return Err(other),
            }
        }
    }
}
