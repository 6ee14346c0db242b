//! A MENACE session: the matchboxes, the record and the games played with them

use log::{debug, info};

use super::{
    engine::{GameEnd, GameEngine},
    feedback::{ClassicFeedback, FeedbackRule, ReinforcementValues},
    matchbox::DEFAULT_INITIAL_BEADS,
    policy::MovePolicy,
    record::Record,
    store::MatchboxStore,
};
use crate::{
    Error, Result,
    adapters::RandomMoveSource,
    ports::{GameObserver, MoveSource, SessionRepository},
    tictactoe::Side,
};

/// Mixed into the seed of the training opponent so it does not share a
/// random stream with the agent's policy.
const OPPONENT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// How much a session tells the person in front of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Show the board, the matchboxes opened and the result of every game
    #[default]
    Narrate,
    /// Report nothing per move
    Quiet,
}

/// Configuration for a MENACE session.
///
/// # Examples
///
/// ```
/// use menace::menace::{SessionConfig, Verbosity};
/// use menace::tictactoe::Side;
///
/// let config = SessionConfig::new()
///     .with_seed(42)
///     .with_first(Side::Agent)
///     .with_verbosity(Verbosity::Quiet);
/// assert_eq!(config.initial_beads, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Side that opens every game
    pub first: Side,
    /// Bead adjustments per outcome
    pub reinforcement: ReinforcementValues,
    /// Beads placed on every empty cell of a new matchbox
    pub initial_beads: u32,
    pub verbosity: Verbosity,
}

impl SessionConfig {
    /// Defaults: human first, classic 3/1/-1 reinforcement, 10 beads per
    /// cell, narrated, no seed.
    pub fn new() -> Self {
        Self {
            seed: None,
            first: Side::Human,
            reinforcement: ReinforcementValues::default(),
            initial_beads: DEFAULT_INITIAL_BEADS,
            verbosity: Verbosity::default(),
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    pub fn with_reinforcement(mut self, reinforcement: ReinforcementValues) -> Self {
        self.reinforcement = reinforcement;
        self
    }

    pub fn with_initial_beads(mut self, initial_beads: u32) -> Self {
        self.initial_beads = initial_beads;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when new matchboxes would start
    /// out empty.
    pub fn validate(&self) -> Result<()> {
        if self.initial_beads == 0 {
            return Err(Error::InvalidConfiguration {
                message: "initial beads must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns everything that outlives a single game.
pub struct Session {
    config: SessionConfig,
    store: MatchboxStore,
    record: Record,
    policy: MovePolicy,
    feedback: Box<dyn FeedbackRule>,
    games_played: usize,
}

impl Session {
    /// Fresh session with no matchboxes and an empty record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `config` fails
    /// [`SessionConfig::validate`].
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: MatchboxStore::with_initial_beads(config.initial_beads),
            record: Record::new(),
            policy: MovePolicy::from_seed(config.seed),
            feedback: Box::new(ClassicFeedback::with_reinforcement(config.reinforcement)),
            games_played: 0,
            config,
        })
    }

    /// Session resumed from whatever `repository` holds.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, unreadable storage, or a saved
    /// mapping that [`MatchboxStore::load`] rejects.
    pub fn open<P: SessionRepository + ?Sized>(
        config: SessionConfig,
        repository: &P,
    ) -> Result<Self> {
        let mut session = Self::new(config)?;
        if let Some(matchboxes) = repository.load_matchboxes()? {
            info!("Loaded {} matchboxes", matchboxes.len());
            session.store.load(matchboxes)?;
        }
        session.record = repository.load_record()?;
        info!("Resuming with record {}", session.record);
        Ok(session)
    }

    /// Replace the feedback rule.
    pub fn with_feedback(mut self, feedback: Box<dyn FeedbackRule>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &MatchboxStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MatchboxStore {
        &mut self.store
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Games finished in this session, whatever the saved record says.
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Play one game against `source`.
    ///
    /// A finished game is reinforced and counted before the observer hears
    /// about it. A quit leaves the matchboxes and the record untouched.
    pub fn play_game<M, O>(&mut self, source: &mut M, observer: &mut O) -> Result<GameEnd>
    where
        M: MoveSource + ?Sized,
        O: GameObserver + ?Sized,
    {
        let game_num = self.games_played;
        observer.on_game_start(game_num)?;

        let mut engine = GameEngine::new(self.config.first);
        let end = engine.play(&mut self.store, &mut self.policy, source, observer)?;

        if let GameEnd::Finished { outcome, trail } = &end {
            self.feedback.apply(&mut self.store, *outcome, trail)?;
            self.record.tally(*outcome);
            self.games_played += 1;
            debug!("game {game_num} ended: {outcome}");
            observer.on_game_end(game_num, *outcome, trail)?;
        }
        Ok(end)
    }

    /// Play `games` complete games against a random opponent.
    pub fn train<O: GameObserver + ?Sized>(&mut self, games: usize, observer: &mut O) -> Result<()> {
        info!("Training for {games} games");
        observer.on_training_start(games)?;

        let mut opponent =
            RandomMoveSource::from_seed(self.config.seed.map(|seed| seed ^ OPPONENT_SEED_SALT));
        for _ in 0..games {
            self.play_game(&mut opponent, observer)?;
        }

        observer.on_training_end(&self.record)?;
        Ok(())
    }

    /// Keep playing until `source` quits.
    pub fn play_interactive<M, O>(&mut self, source: &mut M, observer: &mut O) -> Result<()>
    where
        M: MoveSource + ?Sized,
        O: GameObserver + ?Sized,
    {
        while let GameEnd::Finished { .. } = self.play_game(source, observer)? {}
        debug!("player quit after {} games", self.games_played);
        Ok(())
    }

    /// Save the matchboxes and the record.
    pub fn flush<P: SessionRepository + ?Sized>(&self, repository: &P) -> Result<()> {
        repository.save_matchboxes(&self.store.export())?;
        repository.save_record(&self.record)?;
        info!(
            "Saved {} matchboxes and record {}",
            self.store.len(),
            self.record
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{
        adapters::InMemoryRepository,
        menace::MatchboxMap,
        ports::{MoveRequest, SilentObserver},
        tictactoe::{Board, Outcome},
    };

    struct Scripted(VecDeque<MoveRequest>);

    impl MoveSource for Scripted {
        fn next_move(&mut self, _board: &Board) -> Result<MoveRequest> {
            Ok(self.0.pop_front().unwrap_or(MoveRequest::Quit))
        }
    }

    #[derive(Default)]
    struct Counting {
        starts: usize,
        ends: Vec<usize>,
    }

    impl GameObserver for Counting {
        fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
            self.starts += 1;
            Ok(())
        }

        fn on_game_end(
            &mut self,
            game_num: usize,
            _outcome: Outcome,
            _trail: &crate::menace::Trail,
        ) -> Result<()> {
            self.ends.push(game_num);
            Ok(())
        }
    }

    #[test]
    fn training_counts_every_game() {
        let mut session = Session::new(SessionConfig::new().with_seed(7)).unwrap();
        let mut observer = Counting::default();
        session.train(25, &mut observer).unwrap();

        assert_eq!(session.record().games(), 25);
        assert_eq!(session.games_played(), 25);
        assert_eq!(observer.starts, 25);
        assert_eq!(observer.ends, (0..25).collect::<Vec<_>>());
        assert!(!session.store().is_empty());
    }

    #[test]
    fn seeded_training_is_reproducible() {
        let run = || {
            let mut session = Session::new(SessionConfig::new().with_seed(99)).unwrap();
            session.train(40, &mut SilentObserver).unwrap();
            (*session.record(), session.store().export())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn quit_leaves_record_untouched() {
        let mut session = Session::new(SessionConfig::new().with_seed(3)).unwrap();
        let mut human = Scripted(VecDeque::from([MoveRequest::Cell(4), MoveRequest::Quit]));

        session
            .play_interactive(&mut human, &mut SilentObserver)
            .unwrap();

        assert_eq!(session.record().games(), 0);
        assert_eq!(session.store().len(), 1, "agent answered the first move");
    }

    #[test]
    fn open_resumes_saved_session() {
        let repo = InMemoryRepository::new();
        let mut first = Session::open(SessionConfig::new().with_seed(5), &repo).unwrap();
        first.train(10, &mut SilentObserver).unwrap();
        first.flush(&repo).unwrap();

        let second = Session::open(SessionConfig::new(), &repo).unwrap();
        assert_eq!(second.record(), first.record());
        assert_eq!(second.store().export(), first.store().export());
        assert_eq!(repo.save_count(), 2);
    }

    #[test]
    fn open_rejects_corrupted_store() {
        let repo = InMemoryRepository::new();
        let mut mapping = MatchboxMap::new();
        let mut board = Board::new();
        board.place(0, Side::Human).unwrap();
        mapping.insert(board.encode(), [5; 9]);
        repo.save_matchboxes(&mapping).unwrap();

        let result = Session::open(SessionConfig::new(), &repo);
        assert!(matches!(result, Err(Error::CorruptedStore { .. })));
    }

    #[test]
    fn zero_initial_beads_is_rejected() {
        let config = SessionConfig::new().with_initial_beads(0);
        assert!(matches!(
            Session::new(config.clone()),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Session::open(config, &InMemoryRepository::new()),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn agent_first_opens_empty_board_matchbox() {
        let mut session =
            Session::new(SessionConfig::new().with_seed(1).with_first(Side::Agent)).unwrap();
        let mut human = Scripted(VecDeque::new());
        let end = session.play_game(&mut human, &mut SilentObserver).unwrap();

        assert_eq!(end, GameEnd::Quit);
        assert!(session.store().contains(Board::new().encode()));
    }
}
