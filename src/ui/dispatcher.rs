//! Runs store commands off the UI loop.

use chrono::Utc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::notes::{NoteStore, SharedStore, StoreError};
use crate::ui::events::AppEvent;
use crate::ui::notes::{NotesIntent, StoreCommand};

/// Executes [`StoreCommand`]s on blocking tasks. Every command yields
/// exactly one [`NotesIntent`], delivered as [`AppEvent::Completed`].
#[derive(Clone)]
pub struct CommandDispatcher {
    store: SharedStore,
    tx: UnboundedSender<AppEvent>,
}

impl CommandDispatcher {
    pub fn new(store: SharedStore, tx: UnboundedSender<AppEvent>) -> Self {
        Self { store, tx }
    }

    pub fn dispatch(&self, command: StoreCommand) -> JoinHandle<()> {
        let store = SharedStore::clone(&self.store);
        let tx = self.tx.clone();
        tracing::debug!(command = command.name(), "dispatching store command");
        tokio::task::spawn_blocking(move || {
            let intent = execute(store.as_ref(), command);
            if tx.send(AppEvent::Completed(intent)).is_err() {
                tracing::debug!("event loop gone, dropping command result");
            }
        })
    }
}

/// Run one command synchronously and wrap its outcome.
pub fn execute(store: &dyn NoteStore, command: StoreCommand) -> NotesIntent {
    let name = command.name();
    let intent = match command {
        StoreCommand::LoadAll => NotesIntent::NotesLoaded {
            result: store.list(),
        },
        StoreCommand::Save(draft) => {
            let note = draft.into_note(Utc::now());
            NotesIntent::NoteSaved {
                result: store.save(&note),
            }
        }
        StoreCommand::Delete(id) => {
            let result = store.delete(&id);
            NotesIntent::NoteDeleted { id, result }
        }
        StoreCommand::Search { query } => {
            let result = store.search(&query);
            NotesIntent::SearchCompleted { query, result }
        }
    };
    if let Some(err) = intent_error(&intent) {
        tracing::warn!(command = name, error = %err, "store command failed");
    }
    intent
}

fn intent_error(intent: &NotesIntent) -> Option<&StoreError> {
    match intent {
        NotesIntent::NotesLoaded { result: Err(err) }
        | NotesIntent::SearchCompleted { result: Err(err), .. } => Some(err),
        NotesIntent::NoteSaved { result: Err(err) } => Some(err),
        NotesIntent::NoteDeleted { result: Err(err), .. } => Some(err),
        _ => None,
    }
}
