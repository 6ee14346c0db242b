//! Repository port for session persistence.
//!
//! This module defines the trait boundary between the learning core and the
//! storage of its matchboxes and win/loss/draw record.

use crate::{Result, menace::MatchboxMap, menace::Record};

/// Port for persisting and loading a MENACE session.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (files, memory, ...) without coupling the core to a
/// serialization format.
///
/// # Examples
///
/// ```
/// use menace::adapters::InMemoryRepository;
/// use menace::ports::SessionRepository;
/// use menace::menace::Record;
///
/// let repo = InMemoryRepository::new();
/// assert!(repo.load_matchboxes()?.is_none());
///
/// repo.save_record(&Record { wins: 1, losses: 0, draws: 2 })?;
/// assert_eq!(repo.load_record()?.draws, 2);
/// # Ok::<(), menace::Error>(())
/// ```
pub trait SessionRepository {
    /// Load previously saved matchboxes.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if saved data exists but cannot be read or decoded.
    fn load_matchboxes(&self) -> Result<Option<MatchboxMap>>;

    /// Save the matchboxes, replacing anything saved before.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be encoded or written.
    fn save_matchboxes(&self, matchboxes: &MatchboxMap) -> Result<()>;

    /// Load the saved record, or an empty record when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a saved record exists but cannot be decoded.
    fn load_record(&self) -> Result<Record>;

    /// Save the record, replacing anything saved before.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be encoded or written.
    fn save_record(&self, record: &Record) -> Result<()>;
}
