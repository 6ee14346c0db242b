//! One game of MENACE against a move source
//!
//! The engine is a small state machine: it waits for a move from one side,
//! applies it, evaluates the board and either hands the turn over or stops.
//! The agent side draws its moves from the matchbox store and remembers each
//! draw in the trail so the game can be scored afterwards.

use log::debug;
use rand::Rng;

use super::{
    policy::{Choice, MovePolicy},
    store::MatchboxStore,
    trail::Trail,
};
use crate::{
    Error, Result,
    ports::{GameObserver, MoveRequest, MoveSource},
    tictactoe::{Board, Outcome, Side},
};

/// Where a game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Side),
    Finished(Outcome),
}

/// How a game stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a result; the trail is ready for feedback.
    Finished { outcome: Outcome, trail: Trail },
    /// The move source asked to end the session mid-game.
    Quit,
}

/// A single game; dropped once it has finished.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    trail: Trail,
    phase: Phase,
}

impl GameEngine {
    /// Start a game on an empty board with `first` to move.
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            trail: Trail::new(),
            phase: Phase::AwaitingMove(first),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Play one move.
    ///
    /// Returns `Ok(None)` while the game goes on and `Ok(Some(end))` when it
    /// finished or the move source quit.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::GameOver`] once the game has finished, and when a
    /// move source hands over an illegal cell.
    pub fn step<R, M, O>(
        &mut self,
        store: &mut MatchboxStore,
        policy: &mut MovePolicy<R>,
        human: &mut M,
        observer: &mut O,
    ) -> Result<Option<GameEnd>>
    where
        R: Rng,
        M: MoveSource + ?Sized,
        O: GameObserver + ?Sized,
    {
        let side = match self.phase {
            Phase::AwaitingMove(side) => side,
            Phase::Finished(_) => return Err(Error::GameOver),
        };
        observer.on_turn(side, &self.board)?;

        let outcome = match side {
            Side::Human => match human.next_move(&self.board)? {
                MoveRequest::Quit => return Ok(Some(GameEnd::Quit)),
                MoveRequest::Cell(cell) => {
                    self.board.place(cell, Side::Human)?;
                    self.board.evaluate()
                }
            },
            Side::Agent => self.agent_turn(store, policy, observer)?,
        };

        if outcome.is_terminal() {
            self.phase = Phase::Finished(outcome);
            observer.on_final_board(&self.board)?;
            Ok(Some(GameEnd::Finished {
                outcome,
                trail: self.trail.clone(),
            }))
        } else {
            self.phase = Phase::AwaitingMove(side.opponent());
            Ok(None)
        }
    }

    /// Play until the game finishes or the move source quits.
    pub fn play<R, M, O>(
        &mut self,
        store: &mut MatchboxStore,
        policy: &mut MovePolicy<R>,
        human: &mut M,
        observer: &mut O,
    ) -> Result<GameEnd>
    where
        R: Rng,
        M: MoveSource + ?Sized,
        O: GameObserver + ?Sized,
    {
        loop {
            if let Some(end) = self.step(store, policy, human, observer)? {
                return Ok(end);
            }
        }
    }

    /// Draw the agent's move. An empty matchbox concedes the game.
    fn agent_turn<R, O>(
        &mut self,
        store: &mut MatchboxStore,
        policy: &mut MovePolicy<R>,
        observer: &mut O,
    ) -> Result<Outcome>
    where
        R: Rng,
        O: GameObserver + ?Sized,
    {
        let key = self.board.encode();
        observer.on_matchbox(key)?;
        let matchbox = store.get_or_create(key, &self.board);

        match policy.choose(matchbox.beads()) {
            Choice::DeadEnd => {
                debug!("matchbox {key} is empty, conceding");
                observer.on_dead_end(key)?;
                Ok(Outcome::HumanWin)
            }
            Choice::Cell(cell) => {
                self.trail.record(key, cell);
                self.board.place(cell, Side::Agent)?;
                observer.on_agent_move(cell)?;
                Ok(self.board.evaluate())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{ports::SilentObserver, tictactoe::Cell};

    struct Scripted(VecDeque<MoveRequest>);

    impl Scripted {
        fn cells(cells: &[usize]) -> Self {
            Scripted(cells.iter().map(|&c| MoveRequest::Cell(c)).collect())
        }
    }

    impl MoveSource for Scripted {
        fn next_move(&mut self, _board: &Board) -> Result<MoveRequest> {
            Ok(self.0.pop_front().unwrap_or(MoveRequest::Quit))
        }
    }

    #[test]
    fn human_moves_first_by_convention() {
        let mut engine = GameEngine::new(Side::Human);
        let mut store = MatchboxStore::new();
        let mut policy = MovePolicy::seeded(1);
        let mut human = Scripted::cells(&[4]);

        let end = engine
            .step(&mut store, &mut policy, &mut human, &mut SilentObserver)
            .unwrap();
        assert!(end.is_none());
        assert_eq!(engine.board().get(4), Cell::Human);
        assert_eq!(engine.phase(), Phase::AwaitingMove(Side::Agent));
        assert!(store.is_empty(), "human turns never open matchboxes");
    }

    #[test]
    fn agent_turn_records_trail_and_opens_matchbox() {
        let mut engine = GameEngine::new(Side::Agent);
        let mut store = MatchboxStore::new();
        let mut policy = MovePolicy::seeded(5);
        let mut human = Scripted::cells(&[]);

        engine
            .step(&mut store, &mut policy, &mut human, &mut SilentObserver)
            .unwrap();

        assert_eq!(engine.trail().len(), 1);
        let entry = *engine.trail().iter().next().unwrap();
        assert_eq!(entry.key, Board::new().encode());
        assert_eq!(engine.board().get(entry.cell), Cell::Agent);
        assert!(store.contains(entry.key));
        assert_eq!(engine.phase(), Phase::AwaitingMove(Side::Human));
    }

    #[test]
    fn dead_end_concedes_without_extending_trail() {
        let mut board = Board::new();
        board.place(4, Side::Human).unwrap();
        let mut mapping = crate::menace::MatchboxMap::new();
        mapping.insert(board.encode(), [0; 9]);

        let mut store = MatchboxStore::new();
        store.load(mapping).unwrap();
        let mut engine = GameEngine::new(Side::Human);
        let mut policy = MovePolicy::seeded(2);
        let mut human = Scripted::cells(&[4]);

        let end = engine
            .play(&mut store, &mut policy, &mut human, &mut SilentObserver)
            .unwrap();

        assert_eq!(
            end,
            GameEnd::Finished {
                outcome: Outcome::HumanWin,
                trail: Trail::new()
            }
        );
        assert_eq!(engine.phase(), Phase::Finished(Outcome::HumanWin));
        assert!(engine.trail().is_empty());
        assert_eq!(engine.board().empty_positions().len(), 8);
    }

    #[test]
    fn quit_ends_game_without_result() {
        let mut engine = GameEngine::new(Side::Human);
        let mut store = MatchboxStore::new();
        let mut policy = MovePolicy::seeded(1);
        let mut human = Scripted(VecDeque::from([MoveRequest::Quit]));

        let end = engine
            .play(&mut store, &mut policy, &mut human, &mut SilentObserver)
            .unwrap();
        assert_eq!(end, GameEnd::Quit);
        assert_eq!(engine.phase(), Phase::AwaitingMove(Side::Human));
    }

    #[test]
    fn stepping_finished_game_fails() {
        let mut store = MatchboxStore::new();
        let mut policy = MovePolicy::seeded(11);
        let mut engine = GameEngine::new(Side::Human);
        let mut human = crate::adapters::RandomMoveSource::seeded(3);

        let end = engine
            .play(&mut store, &mut policy, &mut human, &mut SilentObserver)
            .unwrap();
        assert!(matches!(end, GameEnd::Finished { .. }));

        let again = engine.step(&mut store, &mut policy, &mut human, &mut SilentObserver);
        assert!(matches!(again, Err(Error::GameOver)));
    }

    #[test]
    fn trail_has_one_entry_per_agent_move() {
        let mut store = MatchboxStore::new();
        let mut policy = MovePolicy::seeded(21);
        let mut human = crate::adapters::RandomMoveSource::seeded(8);

        for _ in 0..50 {
            let mut engine = GameEngine::new(Side::Human);
            let end = engine
                .play(&mut store, &mut policy, &mut human, &mut SilentObserver)
                .unwrap();
            let GameEnd::Finished { outcome, trail } = end else {
                panic!("random source never quits");
            };
            let agent_marks = engine
                .board()
                .cells()
                .iter()
                .filter(|&&c| c == Cell::Agent)
                .count();
            assert_eq!(trail.len(), agent_marks);
            assert_eq!(outcome, engine.board().evaluate());
        }
    }
}
