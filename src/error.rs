//! Error types for workspace and storage operations
//!
//! Provides unified error handling for the notes canvas and the durable
//! storage boundary.

use thiserror::Error;

/// Errors surfaced by workspace and note-store operations
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Note title was empty (or whitespace-only) after trimming
    #[error("Note title cannot be empty")]
    EmptyTitle,

    /// Note title exceeded the editor limit
    #[error("Note title too long: {len} chars (max {max})")]
    TitleTooLong { len: usize, max: usize },

    /// No note with the given id exists in the store
    #[error("Unknown note id: {0}")]
    UnknownNote(u64),

    /// The owning idea record could not be loaded; the workspace cannot open
    #[error("Idea not found: {0}")]
    IdeaNotFound(String),

    /// Durable storage failed underneath a workspace operation
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from the durable-storage boundary
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No record stored under the requested id
    #[error("No idea record for id: {0}")]
    NotFound(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for workspace operations
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<String> for StorageError {
    fn from(s: String) -> Self {
        StorageError::Other(s)
    }
}

impl From<&str> for StorageError {
    fn from(s: &str) -> Self {
        StorageError::Other(s.to_string())
    }
}
