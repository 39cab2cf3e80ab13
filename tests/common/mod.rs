//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use leaf::notes::{FileNoteStore, Note};
use leaf::ui::mvi::Reducer;
use leaf::ui::notes::{NotesCommand, NotesIntent, NotesReducer, NotesState, StoreCommand};
use tempfile::TempDir;

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// A note whose timestamps are `created`/`updated` minutes after [`base_time`].
pub fn note_at(title: &str, content: &str, created: i64, updated: i64) -> Note {
    let mut note = Note::new(title, content);
    note.created_at = base_time() + Duration::minutes(created);
    note.updated_at = base_time() + Duration::minutes(updated);
    note
}

pub fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn press(code: KeyCode) -> NotesIntent {
    NotesIntent::Key(key(code, KeyModifiers::NONE))
}

pub fn ch(c: char) -> NotesIntent {
    press(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> NotesIntent {
    NotesIntent::Key(key(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Feed one intent through the reducer.
pub fn step(state: NotesState, intent: NotesIntent) -> (NotesState, Vec<NotesCommand>) {
    NotesReducer::reduce(state, intent)
}

/// Feed intents in order, collecting every emitted command.
pub fn run(
    state: NotesState,
    intents: impl IntoIterator<Item = NotesIntent>,
) -> (NotesState, Vec<NotesCommand>) {
    let mut state = state;
    let mut all = Vec::new();
    for intent in intents {
        let (next, commands) = step(state, intent);
        state = next;
        all.extend(commands);
    }
    (state, all)
}

pub fn type_text(state: NotesState, text: &str) -> (NotesState, Vec<NotesCommand>) {
    run(state, text.chars().map(ch))
}

/// List state already holding `notes`, as after a successful load.
pub fn loaded(notes: Vec<Note>) -> NotesState {
    let (state, _) = step(
        NotesState::default(),
        NotesIntent::NotesLoaded { result: Ok(notes) },
    );
    state
}

pub fn store_commands(commands: &[NotesCommand]) -> Vec<&StoreCommand> {
    commands
        .iter()
        .filter_map(|command| match command {
            NotesCommand::Store(store) => Some(store),
            NotesCommand::Quit => None,
        })
        .collect()
}

pub fn temp_store() -> (TempDir, FileNoteStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileNoteStore::open(dir.path().join("notes")).expect("Failed to open store");
    (dir, store)
}
