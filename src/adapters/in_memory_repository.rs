//! In-memory session repository for testing.
//!
//! This adapter provides a pure in-memory implementation of
//! SessionRepository, enabling fast tests without any file system I/O. Data
//! is still encoded the same way the file repository encodes it, so
//! round trips exercise serialization.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    Result,
    error::Error,
    menace::{MatchboxMap, Record},
    ports::SessionRepository,
};

#[derive(Debug, Default)]
struct Storage {
    matchboxes: Option<Vec<u8>>,
    record: Option<Vec<u8>>,
    saves: usize,
}

/// In-memory repository for testing.
///
/// # Thread Safety
///
/// Clones share the same underlying storage, so a test can keep one handle
/// while the session under test owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<Storage>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, Storage> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of save calls received so far.
    ///
    /// Useful for testing to verify flushes occurred.
    pub fn save_count(&self) -> usize {
        self.storage().saves
    }

    /// Whether any matchboxes have been saved.
    pub fn has_matchboxes(&self) -> bool {
        self.storage().matchboxes.is_some()
    }

    /// Store raw bytes as if they had been saved, e.g. to simulate corruption.
    pub fn put_raw_matchboxes(&self, bytes: Vec<u8>) {
        self.storage().matchboxes = Some(bytes);
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        *self.storage() = Storage::default();
    }
}

impl SessionRepository for InMemoryRepository {
    fn load_matchboxes(&self) -> Result<Option<MatchboxMap>> {
        let storage = self.storage();
        let Some(bytes) = storage.matchboxes.as_deref() else {
            return Ok(None);
        };
        let matchboxes = rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "decode matchboxes from in-memory storage".to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(matchboxes))
    }

    fn save_matchboxes(&self, matchboxes: &MatchboxMap) -> Result<()> {
        let bytes = rmp_serde::to_vec(matchboxes).map_err(|e| Error::SerializationContext {
            operation: "encode matchboxes for in-memory storage".to_string(),
            message: e.to_string(),
        })?;
        let mut storage = self.storage();
        storage.matchboxes = Some(bytes);
        storage.saves += 1;
        Ok(())
    }

    fn load_record(&self) -> Result<Record> {
        let storage = self.storage();
        match storage.record.as_deref() {
            Some(bytes) => Ok(serde_json::from_slice(bytes)?),
            None => Ok(Record::default()),
        }
    }

    fn save_record(&self, record: &Record) -> Result<()> {
        let bytes = serde_json::to_vec(record)?;
        let mut storage = self.storage();
        storage.record = Some(bytes);
        storage.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let mut matchboxes = MatchboxMap::new();
        matchboxes.insert(Board::new().encode(), [10; 9]);

        // Initially empty
        assert_eq!(repo.save_count(), 0);
        assert!(repo.load_matchboxes().unwrap().is_none());

        repo.save_matchboxes(&matchboxes).unwrap();
        assert_eq!(repo.save_count(), 1);
        assert_eq!(repo.load_matchboxes().unwrap(), Some(matchboxes));
    }

    #[test]
    fn test_corrupted_bytes_fail_to_load() {
        let repo = InMemoryRepository::new();
        repo.put_raw_matchboxes(vec![0xc1]);
        assert!(repo.load_matchboxes().is_err());
    }

    #[test]
    fn test_clear_removes_all() {
        let repo = InMemoryRepository::new();
        repo.save_matchboxes(&MatchboxMap::new()).unwrap();
        repo.save_record(&Record::default()).unwrap();
        assert_eq!(repo.save_count(), 2);

        repo.clear();
        assert_eq!(repo.save_count(), 0);
        assert!(!repo.has_matchboxes());
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1
            .save_record(&Record {
                wins: 1,
                losses: 2,
                draws: 3,
            })
            .unwrap();

        assert_eq!(repo2.load_record().unwrap().losses, 2);
    }
}
