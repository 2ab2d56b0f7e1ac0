//! NotesService — validation, id and timestamp assignment, store mutations.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use super::store::NoteStore;
use super::Note;

/// Validation failures surfaced to the caller as client errors.
/// Nothing is mutated when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotesError {
    #[error("content is required")]
    MissingContent,
    #[error("note id is required")]
    MissingNoteId,
}

#[derive(Clone)]
pub struct NotesService {
    store: Arc<NoteStore>,
}

impl NotesService {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }

    /// All notes under `code`, in insertion order.
    /// A code never written to is an empty collection, not an error.
    pub fn list_notes(&self, code: &str) -> Vec<Note> {
        self.store.get(code)
    }

    /// Append a new note under `code` and return it.
    ///
    /// Content presence is the only check; trimming is the caller's concern.
    pub fn create_note(
        &self,
        code: &str,
        content: &str,
        title: Option<&str>,
    ) -> Result<Note, NotesError> {
        if content.is_empty() {
            return Err(NotesError::MissingContent);
        }

        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: title.unwrap_or_default().to_string(),
            content: content.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };

        let created = note.clone();
        self.store.update(code, |notes| notes.push(note));

        log::debug!("[NOTES] Created note {} under code '{}'", created.id, code);
        Ok(created)
    }

    /// Remove the note with `note_id` from `code`'s collection.
    /// Deleting an id that does not exist is a successful no-op.
    pub fn delete_note(&self, code: &str, note_id: &str) -> Result<(), NotesError> {
        if note_id.is_empty() {
            return Err(NotesError::MissingNoteId);
        }

        let mut removed = 0;
        self.store.update(code, |notes| {
            let before = notes.len();
            notes.retain(|n| n.id != note_id);
            removed = before - notes.len();
        });

        log::debug!(
            "[NOTES] Removed {} note(s) matching {} under code '{}'",
            removed,
            note_id,
            code
        );
        Ok(())
    }
}
