//! File-backed implementation of the session repository.
//!
//! Matchboxes are written as MessagePack via rmp_serde for compact binary
//! storage; the record is a small, human-readable JSON file.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    Result,
    error::Error,
    menace::{MatchboxMap, Record},
    ports::SessionRepository,
};

/// Default file name for the saved matchboxes.
pub const DEFAULT_MATCHBOX_FILE: &str = "mboxes.msgpack";
/// Default file name for the saved record.
pub const DEFAULT_RECORD_FILE: &str = "record.json";

/// Session repository storing matchboxes and record in two files.
///
/// # Examples
///
/// ```no_run
/// use menace::adapters::FileRepository;
/// use menace::ports::SessionRepository;
///
/// let repo = FileRepository::new("mboxes.msgpack", "record.json");
/// let saved = repo.load_matchboxes()?;
/// println!("{} matchboxes on disk", saved.map_or(0, |m| m.len()));
/// # Ok::<(), menace::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileRepository {
    matchbox_path: PathBuf,
    record_path: PathBuf,
}

impl FileRepository {
    pub fn new(matchbox_path: impl Into<PathBuf>, record_path: impl Into<PathBuf>) -> Self {
        Self {
            matchbox_path: matchbox_path.into(),
            record_path: record_path.into(),
        }
    }

    /// Repository using the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_MATCHBOX_FILE), dir.join(DEFAULT_RECORD_FILE))
    }

    pub fn matchbox_path(&self) -> &Path {
        &self.matchbox_path
    }

    pub fn record_path(&self) -> &Path {
        &self.record_path
    }

    fn open(path: &Path) -> Result<Option<BufReader<File>>> {
        match File::open(path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Io {
                operation: format!("open file {path:?}"),
                source,
            }),
        }
    }

    fn create(path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        Ok(BufWriter::new(file))
    }
}

impl Default for FileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_MATCHBOX_FILE, DEFAULT_RECORD_FILE)
    }
}

impl SessionRepository for FileRepository {
    fn load_matchboxes(&self) -> Result<Option<MatchboxMap>> {
        let Some(reader) = Self::open(&self.matchbox_path)? else {
            return Ok(None);
        };
        let matchboxes: MatchboxMap =
            rmp_serde::decode::from_read(reader).map_err(|e| Error::SerializationContext {
                operation: format!("decode matchboxes from {:?}", self.matchbox_path),
                message: e.to_string(),
            })?;
        info!(
            "read {} matchboxes from {:?}",
            matchboxes.len(),
            self.matchbox_path
        );
        Ok(Some(matchboxes))
    }

    fn save_matchboxes(&self, matchboxes: &MatchboxMap) -> Result<()> {
        let mut writer = Self::create(&self.matchbox_path)?;
        rmp_serde::encode::write(&mut writer, matchboxes).map_err(|e| {
            Error::SerializationContext {
                operation: "encode matchboxes as MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush {:?}", self.matchbox_path),
            source,
        })?;
        info!(
            "wrote {} matchboxes to {:?}",
            matchboxes.len(),
            self.matchbox_path
        );
        Ok(())
    }

    fn load_record(&self) -> Result<Record> {
        match Self::open(&self.record_path)? {
            Some(reader) => Ok(serde_json::from_reader(reader)?),
            None => Ok(Record::default()),
        }
    }

    fn save_record(&self, record: &Record) -> Result<()> {
        let mut writer = Self::create(&self.record_path)?;
        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush {:?}", self.record_path),
            source,
        })?;
        Ok(())
    }
}
