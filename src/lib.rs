//! ideaboard - the notes-canvas engine for the idea workspace.
//!
//! Users flesh out a captured idea on a freehand sticky-note board:
//! pannable, zoomable, with drag-to-move notes and double-tap editing.
//! This crate is the headless engine behind that panel - gesture
//! classification, coordinate transforms, the note store, and debounced
//! persistence to the owning idea record. The UI shell feeds it touch
//! events and timer ticks and renders from its state.

pub mod animations;
pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod render;
pub mod storage;
pub mod store;
pub mod sync;
pub mod types;
pub mod workspace;

pub use error::{StorageError, WorkspaceError};
pub use input::{CanvasTransform, InputState};
pub use storage::{FileIdeaStorage, IdeaRecord, IdeaStorage, MemoryIdeaStorage};
pub use store::{NotePatch, NoteStore};
pub use types::{CategoryData, Note, NoteCategory, Point2, point2};
pub use workspace::{CanvasEvent, IdeaWorkspace};
