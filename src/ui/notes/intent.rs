//! Events fed into the notebook reducer.

use crossterm::event::KeyEvent;

use crate::notes::{Note, NoteId, StoreError};
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum NotesIntent {
    /// A key press, routed by mode and then by focused field.
    Key(KeyEvent),

    /// Terminal size changed. Never changes mode or notes.
    Resize { width: u16, height: u16 },

    /// Outcome of a load-all command.
    NotesLoaded { result: Result<Vec<Note>, StoreError> },

    /// Outcome of a save command.
    NoteSaved { result: Result<Note, StoreError> },

    /// Outcome of a delete command.
    NoteDeleted {
        id: NoteId,
        result: Result<(), StoreError>,
    },

    /// Outcome of a search command issued for `query`.
    SearchCompleted {
        query: String,
        result: Result<Vec<Note>, StoreError>,
    },
}

impl Intent for NotesIntent {}
