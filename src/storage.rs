//! The durable-storage boundary.
//!
//! The workspace treats the owning idea record as a single external
//! resource: it hydrates from it on open and writes the full note
//! collection back as one unit on every flush. Concurrent edits from other
//! devices are not reconciled here - last full write wins.

use crate::error::{StorageError, StorageResult};
use crate::types::Note;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// The slice of the idea document this engine owns.
///
/// The full idea record carries conversation history and generated cards;
/// those fields belong to other subsystems and are not round-tripped here.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub next_note_id: u64,
}

impl IdeaRecord {
    /// Fresh record with a generated id and no notes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            notes: Vec::new(),
            next_note_id: 0,
        }
    }
}

/// Storage operations the workspace needs from the idea persistence
/// collaborator.
pub trait IdeaStorage: Send + Sync {
    /// Load the idea record that owns the workspace's notes.
    fn fetch_idea(&self, idea_id: &str) -> StorageResult<IdeaRecord>;

    /// Overwrite the record's note collection (and id counter) as one unit.
    fn update_notes(&self, idea_id: &str, notes: &[Note], next_note_id: u64)
    -> StorageResult<()>;
}

/// File-backed storage: one JSON document per idea under a data directory.
pub struct FileIdeaStorage {
    root: PathBuf,
}

impl FileIdeaStorage {
    /// Store records under an explicit directory (created on demand).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store records under the platform data directory.
    pub fn in_data_dir() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ideaboard")
            .join("ideas");
        Self { root }
    }

    fn record_path(&self, idea_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", idea_id))
    }

    /// Create or overwrite a record. Used by the shell when an idea is
    /// first captured; the workspace itself only updates notes.
    pub fn put_idea(&self, record: &IdeaRecord) -> StorageResult<()> {
        self.write_record(record)
    }

    fn read_record(&self, idea_id: &str) -> StorageResult<IdeaRecord> {
        let path = self.record_path(idea_id);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(idea_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&data)?)
    }

    fn write_record(&self, record: &IdeaRecord) -> StorageResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.record_path(&record.id);

        // Write-then-rename so a crash mid-write never truncates the record.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)?;
        serde_json::to_writer_pretty(&mut tmp, record)?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }
}

impl IdeaStorage for FileIdeaStorage {
    fn fetch_idea(&self, idea_id: &str) -> StorageResult<IdeaRecord> {
        self.read_record(idea_id)
    }

    fn update_notes(
        &self,
        idea_id: &str,
        notes: &[Note],
        next_note_id: u64,
    ) -> StorageResult<()> {
        let mut record = self.read_record(idea_id)?;
        record.notes = notes.to_vec();
        record.next_note_id = next_note_id;
        self.write_record(&record)
    }
}

/// In-memory storage for tests and previews.
///
/// Tracks write counts and can be told to fail, so synchronizer behavior
/// (debounce, retry-on-next-mutation) is observable.
#[derive(Default)]
pub struct MemoryIdeaStorage {
    records: Mutex<HashMap<String, IdeaRecord>>,
    write_count: AtomicU64,
    fail_writes: AtomicBool,
}

impl MemoryIdeaStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_idea(&self, record: IdeaRecord) {
        self.records.lock().insert(record.id.clone(), record);
    }

    pub fn get_idea(&self, idea_id: &str) -> Option<IdeaRecord> {
        self.records.lock().get(idea_id).cloned()
    }

    /// Number of successful `update_notes` calls observed.
    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::SeqCst)
    }

    /// When set, `update_notes` fails until cleared.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl IdeaStorage for MemoryIdeaStorage {
    fn fetch_idea(&self, idea_id: &str) -> StorageResult<IdeaRecord> {
        self.records
            .lock()
            .get(idea_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(idea_id.to_string()))
    }

    fn update_notes(
        &self,
        idea_id: &str,
        notes: &[Note],
        next_note_id: u64,
    ) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Other("simulated write failure".to_string()));
        }
        let mut records = self.records.lock();
        let record = records
            .get_mut(idea_id)
            .ok_or_else(|| StorageError::NotFound(idea_id.to_string()))?;
        record.notes = notes.to_vec();
        record.next_note_id = next_note_id;
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
