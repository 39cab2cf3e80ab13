//! Model for the notebook screen.

use crate::notes::{Note, NoteDraft};
use crate::ui::mvi::UiState;
use crate::ui::text_field::TextField;

pub const DEFAULT_TITLE_CHAR_LIMIT: usize = 100;
pub const DEFAULT_CONTENT_CHAR_LIMIT: usize = 10_000;

/// Top-level interaction mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    View,
    Edit,
    Search,
    Create,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::List => "Notes",
            Mode::View => "Reading",
            Mode::Edit => "Editing",
            Mode::Search => "Search",
            Mode::Create => "New note",
        }
    }
}

/// Ordering applied to the loaded notes. Cycles with period six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    UpdatedDesc,
    UpdatedAsc,
    CreatedDesc,
    CreatedAsc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::UpdatedDesc,
        SortMode::UpdatedAsc,
        SortMode::CreatedDesc,
        SortMode::CreatedAsc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::UpdatedDesc => "updated (newest first)",
            SortMode::UpdatedAsc => "updated (oldest first)",
            SortMode::CreatedDesc => "created (newest first)",
            SortMode::CreatedAsc => "created (oldest first)",
            SortMode::TitleAsc => "title (A-Z)",
            SortMode::TitleDesc => "title (Z-A)",
        }
    }
}

/// Which text field receives delegated keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Content,
}

/// Sub-steps of note creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CreateStep {
    /// Typing the title.
    #[default]
    Title,
    /// Title confirmed; typing content for the pending note.
    Content { draft: NoteDraft },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: TextField,
    pub results: Vec<Note>,
    pub selected: usize,
}

impl SearchState {
    /// Empty, focused query limited to `char_limit` characters.
    pub fn new(char_limit: usize) -> Self {
        let mut query = TextField::single_line(char_limit);
        query.focus();
        Self {
            query,
            results: Vec::new(),
            selected: 0,
        }
    }

    pub fn selected_result(&self) -> Option<&Note> {
        self.results.get(self.selected)
    }
}

/// Mode discriminant together with the data only that mode owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    List,
    View {
        note: Note,
    },
    /// `note` is a detached copy; edits live in the text fields until saved.
    Edit {
        note: Note,
    },
    Search(SearchState),
    Create(CreateStep),
}

/// Character limits applied to the editing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub title: usize,
    pub content: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_CHAR_LIMIT,
            content: DEFAULT_CONTENT_CHAR_LIMIT,
        }
    }
}

/// The single state container for the notebook.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesState {
    pub screen: Screen,
    /// Cache of the store, refreshed after every mutation.
    pub notes: Vec<Note>,
    pub selected_idx: usize,
    pub sort_mode: SortMode,
    pub last_error: Option<String>,
    /// Note awaiting a second `d`. Present exactly while confirmation is pending.
    pub pending_delete: Option<Note>,
    pub size: Option<(u16, u16)>,
    pub title_field: TextField,
    pub content_field: TextField,
}

impl UiState for NotesState {}

impl Default for NotesState {
    fn default() -> Self {
        Self::new(FieldLimits::default())
    }
}

impl NotesState {
    pub fn new(limits: FieldLimits) -> Self {
        Self {
            screen: Screen::List,
            notes: Vec::new(),
            selected_idx: 0,
            sort_mode: SortMode::default(),
            last_error: None,
            pending_delete: None,
            size: None,
            title_field: TextField::single_line(limits.title),
            content_field: TextField::multi_line(limits.content),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.screen {
            Screen::List => Mode::List,
            Screen::View { .. } => Mode::View,
            Screen::Edit { .. } => Mode::Edit,
            Screen::Search(_) => Mode::Search,
            Screen::Create(_) => Mode::Create,
        }
    }

    /// Note being read or edited.
    pub fn current_note(&self) -> Option<&Note> {
        match &self.screen {
            Screen::View { note } | Screen::Edit { note } => Some(note),
            _ => None,
        }
    }

    /// Pending note of the create flow; exists only in its content step.
    pub fn creating_note(&self) -> Option<&NoteDraft> {
        match &self.screen {
            Screen::Create(CreateStep::Content { draft }) => Some(draft),
            _ => None,
        }
    }

    pub fn search(&self) -> Option<&SearchState> {
        match &self.screen {
            Screen::Search(search) => Some(search),
            _ => None,
        }
    }

    pub fn search_query(&self) -> Option<&str> {
        self.search().map(|search| search.query.value())
    }

    /// Focused text field, in modes that own one.
    pub fn focus(&self) -> Option<Focus> {
        match self.mode() {
            Mode::Edit | Mode::Create if self.title_field.is_focused() => Some(Focus::Title),
            Mode::Edit | Mode::Create if self.content_field.is_focused() => Some(Focus::Content),
            _ => None,
        }
    }

    pub fn delete_confirm(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.selected_idx)
    }

    pub fn is_create_title_step(&self) -> bool {
        matches!(self.screen, Screen::Create(CreateStep::Title))
    }

    /// Give keyboard focus to exactly one of the two fields.
    pub fn focus_field(&mut self, focus: Focus) {
        match focus {
            Focus::Title => {
                self.content_field.blur();
                self.title_field.focus();
            }
            Focus::Content => {
                self.title_field.blur();
                self.content_field.focus();
            }
        }
    }

    pub fn reset_fields(&mut self) {
        self.title_field.clear();
        self.title_field.blur();
        self.content_field.clear();
        self.content_field.blur();
    }

    pub fn clear_pending_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Keep the selection inside `[0, len-1]`, or 0 for an empty list.
    pub fn clamp_selection(&mut self) {
        self.selected_idx = self.selected_idx.min(self.notes.len().saturating_sub(1));
    }
}
