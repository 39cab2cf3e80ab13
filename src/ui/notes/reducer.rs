//! Reducer for the notebook: every state transition lives here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::notes::{Note, NoteDraft, StoreError};
use crate::ui::input::{is_ctrl_char, is_key, is_plain_char};
use crate::ui::mvi::Reducer;

use super::command::{NotesCommand, StoreCommand};
use super::intent::NotesIntent;
use super::sort::sort_notes;
use super::state::{CreateStep, FieldLimits, Focus, Mode, NotesState, Screen, SearchState};

pub const EMPTY_TITLE_ERROR: &str = "Title cannot be empty";

type Transition = (NotesState, Vec<NotesCommand>);

/// Pure transition function for [`NotesState`].
///
/// Performs no I/O: storage access and quitting are returned as
/// [`NotesCommand`]s. Store results are applied whatever mode is active when
/// they arrive, so a save finishing after the user moved on still triggers
/// its reload.
pub struct NotesReducer;

impl NotesReducer {
    /// Initial state plus the load that populates it.
    pub fn init(limits: FieldLimits) -> Transition {
        (
            NotesState::new(limits),
            vec![StoreCommand::LoadAll.into()],
        )
    }
}

impl Reducer for NotesReducer {
    type State = NotesState;
    type Intent = NotesIntent;
    type Command = NotesCommand;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition {
        match intent {
            NotesIntent::Key(key) => reduce_key(state, key),
            NotesIntent::Resize { width, height } => {
                let mut state = state;
                state.size = Some((width, height));
                unchanged(state)
            }
            NotesIntent::NotesLoaded { result } => notes_loaded(state, result),
            NotesIntent::NoteSaved { result } => note_saved(state, result),
            NotesIntent::NoteDeleted { result, .. } => note_deleted(state, result),
            NotesIntent::SearchCompleted { query, result } => search_completed(state, query, result),
        }
    }
}

fn unchanged(state: NotesState) -> Transition {
    (state, Vec::new())
}

fn reload(state: NotesState) -> Transition {
    (state, vec![StoreCommand::LoadAll.into()])
}

// ============================================================================
// Store results
// ============================================================================

fn notes_loaded(mut state: NotesState, result: Result<Vec<Note>, StoreError>) -> Transition {
    match result {
        Err(err) => state.last_error = Some(err.to_string()),
        Ok(notes) => {
            state.last_error = None;
            state.notes = notes;
            sort_notes(&mut state.notes, state.sort_mode);
            state.clamp_selection();

            let pending_gone = state
                .pending_delete
                .as_ref()
                .is_some_and(|pending| !state.notes.iter().any(|note| note.id == pending.id));
            if pending_gone {
                state.clear_pending_delete();
            }
        }
    }
    unchanged(state)
}

fn note_saved(mut state: NotesState, result: Result<Note, StoreError>) -> Transition {
    match result {
        Err(err) => {
            state.last_error = Some(err.to_string());
            unchanged(state)
        }
        Ok(_) => {
            state.last_error = None;
            reload(state)
        }
    }
}

fn note_deleted(mut state: NotesState, result: Result<(), StoreError>) -> Transition {
    state.clear_pending_delete();
    match result {
        Err(err) => {
            state.last_error = Some(err.to_string());
            unchanged(state)
        }
        Ok(()) => {
            state.last_error = None;
            reload(state)
        }
    }
}

fn search_completed(
    mut state: NotesState,
    query: String,
    result: Result<Vec<Note>, StoreError>,
) -> Transition {
    // Results for a query the user has since changed are stale.
    if state.search_query() != Some(query.as_str()) {
        return unchanged(state);
    }
    let sort_mode = state.sort_mode;
    match result {
        Err(err) => state.last_error = Some(err.to_string()),
        Ok(mut notes) => {
            state.last_error = None;
            sort_notes(&mut notes, sort_mode);
            if let Screen::Search(search) = &mut state.screen {
                search.selected = search.selected.min(notes.len().saturating_sub(1));
                search.results = notes;
            }
        }
    }
    unchanged(state)
}

// ============================================================================
// Keys
// ============================================================================

fn reduce_key(mut state: NotesState, key: KeyEvent) -> Transition {
    if key.kind != KeyEventKind::Press {
        return unchanged(state);
    }
    if is_ctrl_char(key, 'c') {
        return (state, vec![NotesCommand::Quit]);
    }
    if is_key(key, KeyCode::Esc) && state.delete_confirm() {
        state.clear_pending_delete();
        return unchanged(state);
    }

    match state.mode() {
        Mode::List => list_key(state, key),
        Mode::View => view_key(state, key),
        Mode::Edit => edit_key(state, key),
        Mode::Search => search_key(state, key),
        Mode::Create => create_key(state, key),
    }
}

fn list_key(mut state: NotesState, key: KeyEvent) -> Transition {
    if is_plain_char(key, 'q') {
        return (state, vec![NotesCommand::Quit]);
    }
    if is_plain_char(key, 'd') {
        return request_delete(state);
    }

    if is_plain_char(key, 'n') {
        state.clear_pending_delete();
        state.reset_fields();
        state.focus_field(Focus::Title);
        state.screen = Screen::Create(CreateStep::Title);
    } else if is_plain_char(key, 'r') {
        if let Some(note) = state.selected_note().cloned() {
            state.clear_pending_delete();
            state.screen = Screen::View { note };
        }
    } else if is_plain_char(key, 'e') {
        if let Some(note) = state.selected_note().cloned() {
            state.clear_pending_delete();
            begin_edit(&mut state, note);
        }
    } else if is_plain_char(key, '/') {
        state.clear_pending_delete();
        let limit = state.title_field.char_limit();
        state.screen = Screen::Search(SearchState::new(limit));
    } else if is_plain_char(key, 't') {
        state.sort_mode = state.sort_mode.next();
        sort_notes(&mut state.notes, state.sort_mode);
        state.clear_pending_delete();
    } else if is_plain_char(key, 'j') || is_key(key, KeyCode::Down) {
        let last = state.notes.len().saturating_sub(1);
        state.selected_idx = (state.selected_idx + 1).min(last);
        state.clear_pending_delete();
    } else if is_plain_char(key, 'k') || is_key(key, KeyCode::Up) {
        state.selected_idx = state.selected_idx.saturating_sub(1);
        state.clear_pending_delete();
    }
    unchanged(state)
}

/// First `d` arms the confirmation; a second `d` on the same note deletes it.
fn request_delete(mut state: NotesState) -> Transition {
    let Some(selected) = state.selected_note().cloned() else {
        return unchanged(state);
    };
    match state.pending_delete.take() {
        Some(pending) if pending.id == selected.id => {
            (state, vec![StoreCommand::Delete(pending.id).into()])
        }
        _ => {
            state.pending_delete = Some(selected);
            unchanged(state)
        }
    }
}

fn begin_edit(state: &mut NotesState, note: Note) {
    state.title_field.set_value(&note.title);
    state.content_field.set_value(&note.content);
    state.focus_field(Focus::Content);
    state.screen = Screen::Edit { note };
}

fn view_key(mut state: NotesState, key: KeyEvent) -> Transition {
    if is_key(key, KeyCode::Esc) {
        state.screen = Screen::List;
    } else if is_plain_char(key, 'i') || is_plain_char(key, 'e') {
        if let Screen::View { note } = std::mem::take(&mut state.screen) {
            begin_edit(&mut state, note);
        }
    } else if is_plain_char(key, 'q') {
        return (state, vec![NotesCommand::Quit]);
    }
    unchanged(state)
}

fn edit_key(mut state: NotesState, key: KeyEvent) -> Transition {
    if is_key(key, KeyCode::Esc) {
        state.reset_fields();
        state.screen = Screen::List;
    } else if is_key(key, KeyCode::Tab) {
        let next = match state.focus() {
            Some(Focus::Title) => Focus::Content,
            _ => Focus::Title,
        };
        state.focus_field(next);
    } else if is_ctrl_char(key, 's') {
        return save_edit(state);
    } else {
        forward_to_focused(&mut state, key);
    }
    unchanged(state)
}

fn save_edit(mut state: NotesState) -> Transition {
    let title = state.title_field.value().to_string();
    if title.is_empty() {
        state.last_error = Some(EMPTY_TITLE_ERROR.to_string());
        return unchanged(state);
    }
    let draft = state
        .current_note()
        .map(|note| note.to_draft(title, state.content_field.value()));
    let Some(draft) = draft else {
        return unchanged(state);
    };

    state.reset_fields();
    state.screen = Screen::List;
    (state, vec![StoreCommand::Save(draft).into()])
}

fn forward_to_focused(state: &mut NotesState, key: KeyEvent) {
    match state.focus() {
        Some(Focus::Title) => {
            state.title_field.handle_key(key);
        }
        Some(Focus::Content) => {
            state.content_field.handle_key(key);
        }
        None => {}
    }
}

fn create_key(mut state: NotesState, key: KeyEvent) -> Transition {
    if state.is_create_title_step() {
        if is_key(key, KeyCode::Esc) {
            state.reset_fields();
            state.screen = Screen::List;
        } else if is_key(key, KeyCode::Enter) {
            let title = state.title_field.value().to_string();
            if !title.is_empty() {
                state.focus_field(Focus::Content);
                state.screen = Screen::Create(CreateStep::Content {
                    draft: NoteDraft::new(title, ""),
                });
            }
        } else {
            state.title_field.handle_key(key);
        }
        return unchanged(state);
    }

    if is_key(key, KeyCode::Esc) {
        state.focus_field(Focus::Title);
        state.screen = Screen::Create(CreateStep::Title);
    } else if is_ctrl_char(key, 's') {
        if let Screen::Create(CreateStep::Content { mut draft }) = std::mem::take(&mut state.screen)
        {
            draft.content = state.content_field.value().to_string();
            state.reset_fields();
            return (state, vec![StoreCommand::Save(draft).into()]);
        }
    } else if !is_key(key, KeyCode::Tab) {
        state.content_field.handle_key(key);
    }
    unchanged(state)
}

fn search_key(mut state: NotesState, key: KeyEvent) -> Transition {
    if is_key(key, KeyCode::Esc) {
        state.screen = Screen::List;
        return unchanged(state);
    }
    if is_key(key, KeyCode::Enter) {
        let selected = state
            .search()
            .and_then(SearchState::selected_result)
            .cloned();
        if let Some(note) = selected {
            state.screen = Screen::View { note };
        }
        return unchanged(state);
    }

    let command = match &mut state.screen {
        Screen::Search(search) => edit_search(search, key),
        _ => None,
    };
    (state, command.into_iter().map(NotesCommand::from).collect())
}

/// Move the result selection or edit the query. Query edits re-run the search.
fn edit_search(search: &mut SearchState, key: KeyEvent) -> Option<StoreCommand> {
    if is_key(key, KeyCode::Up) {
        search.selected = search.selected.saturating_sub(1);
        return None;
    }
    if is_key(key, KeyCode::Down) {
        search.selected = (search.selected + 1).min(search.results.len().saturating_sub(1));
        return None;
    }

    let before = search.query.value().to_string();
    if !search.query.handle_key(key) || search.query.value() == before {
        return None;
    }
    if search.query.is_empty() {
        search.results.clear();
        search.selected = 0;
        return None;
    }
    Some(StoreCommand::Search {
        query: search.query.value().to_string(),
    })
}
