//! The in-memory note collection for an open idea workspace.
//!
//! Insertion order is iteration order and is stable across updates:
//! updates mutate in place, they never remove-and-append.

use crate::constants::MAX_TITLE_LEN;
use crate::error::{WorkspaceError, WorkspaceResult};
use crate::types::{CategoryData, Note};

/// Partial update applied to an existing note.
///
/// `None` fields are left untouched. Position changes go through
/// [`NoteStore::update_position`] so drag commits stay a one-liner.
#[derive(Clone, Debug, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<CategoryData>,
}

impl NotePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: CategoryData) -> Self {
        self.category = Some(category);
        self
    }
}

/// Ordered collection of notes with id assignment.
#[derive(Clone, Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_note_id: u64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a persisted record.
    ///
    /// The id counter is taken from the record but bumped past any existing
    /// note id, so a record written by an older build can never hand out a
    /// duplicate.
    pub fn from_parts(notes: Vec<Note>, next_note_id: u64) -> Self {
        let max_id = notes.iter().map(|n| n.id + 1).max().unwrap_or(0);
        Self {
            notes,
            next_note_id: next_note_id.max(max_id),
        }
    }

    /// Create a note and return its id.
    ///
    /// Fails without mutating the store if the title is empty after
    /// trimming, or absurdly long.
    pub fn create(
        &mut self,
        title: &str,
        category: CategoryData,
        content: impl Into<String>,
        position: (f32, f32),
    ) -> WorkspaceResult<u64> {
        let title = title.trim();
        if title.is_empty() {
            return Err(WorkspaceError::EmptyTitle);
        }
        if title.len() > MAX_TITLE_LEN {
            return Err(WorkspaceError::TitleTooLong {
                len: title.len(),
                max: MAX_TITLE_LEN,
            });
        }

        let id = self.next_note_id;
        self.next_note_id += 1;
        self.notes.push(Note {
            id,
            title: title.to_string(),
            content: content.into(),
            position,
            category,
        });
        Ok(id)
    }

    /// Merge a patch into an existing note.
    pub fn update(&mut self, id: u64, patch: NotePatch) -> WorkspaceResult<()> {
        // Validate before touching the note so a bad patch leaves it intact.
        if let Some(ref title) = patch.title {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(WorkspaceError::EmptyTitle);
            }
            if trimmed.len() > MAX_TITLE_LEN {
                return Err(WorkspaceError::TitleTooLong {
                    len: trimmed.len(),
                    max: MAX_TITLE_LEN,
                });
            }
        }

        let note = self.get_mut(id).ok_or(WorkspaceError::UnknownNote(id))?;
        if let Some(title) = patch.title {
            note.title = title.trim().to_string();
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(category) = patch.category {
            note.category = category;
        }
        Ok(())
    }

    /// Rewrite a note's logical-space position (the drag-release commit).
    pub fn update_position(&mut self, id: u64, position: (f32, f32)) -> WorkspaceResult<()> {
        let note = self.get_mut(id).ok_or(WorkspaceError::UnknownNote(id))?;
        note.position = position;
        Ok(())
    }

    /// Remove a note. No gesture is bound to this; it exists so the
    /// aggregate is complete for callers that do expose deletion.
    pub fn remove(&mut self, id: u64) -> WorkspaceResult<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(WorkspaceError::UnknownNote(id))?;
        Ok(self.notes.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// All notes in insertion order.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn next_note_id(&self) -> u64 {
        self.next_note_id
    }

    /// Topmost note whose body contains `canvas_point` (logical space).
    /// Later notes render above earlier ones, so scan back-to-front.
    pub fn note_at(&self, canvas_point: (f32, f32)) -> Option<&Note> {
        self.notes.iter().rev().find(|n| n.contains(canvas_point))
    }
}
