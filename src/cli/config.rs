//! Configuration types built from command-line arguments

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::{
    adapters::{
        FileRepository,
        file_repository::{DEFAULT_MATCHBOX_FILE, DEFAULT_RECORD_FILE},
    },
    menace::ReinforcementValues,
};

/// Where a session is saved between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    /// MessagePack file holding the matchboxes
    pub matchboxes: PathBuf,
    /// JSON file holding the win/loss/draw record
    pub record: PathBuf,
}

impl PersistenceConfig {
    pub fn new(matchboxes: impl Into<PathBuf>, record: impl Into<PathBuf>) -> Self {
        Self {
            matchboxes: matchboxes.into(),
            record: record.into(),
        }
    }

    /// Whether a previous run left matchboxes behind.
    pub fn has_saved_matchboxes(&self) -> bool {
        self.matchboxes.is_file()
    }

    pub fn repository(&self) -> FileRepository {
        FileRepository::new(&self.matchboxes, &self.record)
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MATCHBOX_FILE, DEFAULT_RECORD_FILE)
    }
}

/// Parse reward schedule from string (e.g., "win=3,draw=1,loss=-1")
///
/// Keys that are left out keep their classic value.
pub fn parse_reward_schedule(s: &str) -> Result<ReinforcementValues> {
    let mut values = ReinforcementValues::default();

    for part in s.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (key, value_str) = trimmed
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid reward entry '{trimmed}'. Expected key=value"))?;
        let value: i32 = value_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid numeric reward '{value_str}' in '{trimmed}'"))?;
        match key.trim().to_ascii_lowercase().as_str() {
            "win" => values.win = value,
            "draw" => values.draw = value,
            "loss" => values.loss = value,
            other => {
                return Err(anyhow!(
                    "Unknown reward key '{other}'. Expected win, draw, or loss"
                ));
            }
        }
    }

    Ok(values)
}
