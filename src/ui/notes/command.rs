//! Side effects requested by the notebook reducer.

use crate::notes::{NoteDraft, NoteId};
use crate::ui::mvi::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesCommand {
    /// Run an operation against the note store.
    Store(StoreCommand),
    /// Terminate the process.
    Quit,
}

impl Command for NotesCommand {}

/// Store operations. Each produces exactly one follow-up intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    LoadAll,
    Save(NoteDraft),
    Delete(NoteId),
    Search { query: String },
}

impl StoreCommand {
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::LoadAll => "load_all",
            StoreCommand::Save(_) => "save",
            StoreCommand::Delete(_) => "delete",
            StoreCommand::Search { .. } => "search",
        }
    }
}

impl From<StoreCommand> for NotesCommand {
    fn from(command: StoreCommand) -> Self {
        NotesCommand::Store(command)
    }
}
