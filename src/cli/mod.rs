//! Command-line driver for MENACE
//!
//! Parses the arguments, resumes the saved session, plays or trains, and
//! saves the session again on the way out.

pub mod config;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::{
        ConsoleMoveSource, ConsoleNarrator, ProgressObserver,
        file_repository::{DEFAULT_MATCHBOX_FILE, DEFAULT_RECORD_FILE},
    },
    menace::{DEFAULT_INITIAL_BEADS, ReinforcementValues, Session, SessionConfig, Verbosity},
    ports::{GameObserver, SilentObserver},
    tictactoe::Side,
};
use config::{PersistenceConfig, parse_reward_schedule};

#[derive(Parser, Debug)]
#[command(name = "menace")]
#[command(version, about = "Play noughts and crosses against a matchbox learner", long_about = None)]
pub struct Args {
    /// Train against a random opponent for this many games instead of playing
    #[arg(long, short = 'l', value_name = "GAMES")]
    pub learn: Option<usize>,

    /// Matchbox file, loaded at startup and saved on exit
    #[arg(long, default_value = DEFAULT_MATCHBOX_FILE)]
    pub matchboxes: PathBuf,

    /// Win/loss/draw record file
    #[arg(long, default_value = DEFAULT_RECORD_FILE)]
    pub record: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let MENACE open every game
    #[arg(long, default_value_t = false)]
    pub agent_first: bool,

    /// Reward schedule (e.g., "win=3,draw=1,loss=-1")
    #[arg(long)]
    pub reward: Option<String>,

    /// Beads per empty cell in a new matchbox
    #[arg(long, default_value_t = DEFAULT_INITIAL_BEADS)]
    pub init_beads: u32,

    /// Suppress the board, prompts and progress bar
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn persistence(&self) -> PersistenceConfig {
        PersistenceConfig::new(&self.matchboxes, &self.record)
    }

    pub fn session_config(&self) -> Result<SessionConfig> {
        let reinforcement = match &self.reward {
            Some(schedule) => parse_reward_schedule(schedule)?,
            None => ReinforcementValues::default(),
        };
        let mut config = SessionConfig::new()
            .with_reinforcement(reinforcement)
            .with_initial_beads(self.init_beads)
            .with_first(if self.agent_first {
                Side::Agent
            } else {
                Side::Human
            })
            .with_verbosity(if self.quiet {
                Verbosity::Quiet
            } else {
                Verbosity::Narrate
            });
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

/// Run one session to completion.
///
/// Training stops after the requested number of games, interactive play when
/// the player types `quit` or closes stdin. Both paths save the session.
pub fn run(args: Args) -> Result<()> {
    let config = args.session_config()?;
    let persistence = args.persistence();
    let repository = persistence.repository();
    let quiet = config.verbosity == Verbosity::Quiet;

    if !quiet {
        output::print_banner(args.learn);
    }
    if persistence.has_saved_matchboxes() && !quiet {
        output::print_loading();
    }
    let mut session = Session::open(config, &repository).with_context(|| {
        format!(
            "Failed to load session from {}",
            persistence.matchboxes.display()
        )
    })?;

    match args.learn {
        Some(games) => {
            let mut observer: Box<dyn GameObserver> = if quiet {
                Box::new(SilentObserver)
            } else {
                Box::new(ProgressObserver::new())
            };
            session
                .train(games, observer.as_mut())
                .context("Training failed")?;
        }
        None => {
            let mut source = ConsoleMoveSource::stdio(quiet);
            let mut observer: Box<dyn GameObserver> = if quiet {
                Box::new(SilentObserver)
            } else {
                Box::new(ConsoleNarrator::stdout())
            };
            session
                .play_interactive(&mut source, observer.as_mut())
                .context("Game failed")?;
        }
    }

    session.flush(&repository).with_context(|| {
        format!(
            "Failed to save session to {}",
            persistence.matchboxes.display()
        )
    })?;
    if !quiet {
        output::print_summary(session.record(), &persistence, session.store().len());
    }
    Ok(())
}
