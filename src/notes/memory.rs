//! In-memory [`NoteStore`] used by tests and as the reference behaviour
//! for the file store.

use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;

use crate::notes::note::{Note, NoteId};
use crate::notes::store::{next_updated_at, validate_note, NoteStore, StoreError};

#[derive(Default)]
pub struct InMemoryNoteStore {
    notes: Mutex<HashMap<NoteId, Note>>,
    /// When set, every operation fails with this message.
    failure: Mutex<Option<String>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let store = Self::new();
        {
            let mut map = store.notes.lock();
            for mut note in notes {
                note.location = Some(location_for(&note.id));
                map.insert(note.id.clone(), note);
            }
        }
        store
    }

    /// Make every following operation fail with an I/O error carrying `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock() = Some(message.into());
    }

    pub fn clear_failure(&self) {
        *self.failure.lock() = None;
    }

    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_failure(&self, action: &'static str) -> Result<(), StoreError> {
        match self.failure.lock().as_ref() {
            Some(message) => Err(StoreError::io(
                action,
                "memory",
                io::Error::other(message.clone()),
            )),
            None => Ok(()),
        }
    }
}

impl NoteStore for InMemoryNoteStore {
    fn list(&self) -> Result<Vec<Note>, StoreError> {
        self.check_failure("list notes")?;
        let mut notes: Vec<Note> = self.notes.lock().values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    fn get(&self, id: &NoteId) -> Result<Note, StoreError> {
        self.check_failure("read note")?;
        self.notes
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    fn save(&self, note: &Note) -> Result<Note, StoreError> {
        self.check_failure("write note")?;
        validate_note(note)?;
        let mut notes = self.notes.lock();
        let previous = notes.get(&note.id);

        let mut saved = note.clone();
        saved.updated_at = next_updated_at(note, previous, Utc::now());
        if let Some(previous) = previous {
            saved.created_at = previous.created_at;
        }
        saved.location = Some(location_for(&saved.id));
        notes.insert(saved.id.clone(), saved.clone());
        Ok(saved)
    }

    fn delete(&self, id: &NoteId) -> Result<(), StoreError> {
        self.check_failure("delete note")?;
        self.notes
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }
}

fn location_for(id: &NoteId) -> String {
    format!("memory://{id}")
}
