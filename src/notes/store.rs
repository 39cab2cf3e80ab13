use chrono::{DateTime, Utc};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::notes::note::{Note, NoteId};

/// Errors reported by a [`NoteStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    #[error("could not {action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid note: {message}")]
    InvalidNote { message: String },
}

impl StoreError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Persistence contract the state machine's commands run against.
///
/// Implementations must make each `save`/`delete` atomic from the
/// caller's point of view: it either completes or fails visibly.
pub trait NoteStore: Send + Sync {
    /// All stored notes.
    fn list(&self) -> Result<Vec<Note>, StoreError>;

    fn get(&self, id: &NoteId) -> Result<Note, StoreError>;

    /// Create or update keyed by `note.id`. Returns the note as stored,
    /// with its updated timestamp and location set by the store.
    fn save(&self, note: &Note) -> Result<Note, StoreError>;

    /// Remove a note. Fails with [`StoreError::NotFound`] for unknown ids.
    fn delete(&self, id: &NoteId) -> Result<(), StoreError>;

    /// Case-insensitive substring search over title and content.
    fn search(&self, query: &str) -> Result<Vec<Note>, StoreError> {
        let notes = self.list()?;
        Ok(notes.into_iter().filter(|note| note.matches(query)).collect())
    }
}

pub type SharedStore = Arc<dyn NoteStore>;

/// Reject notes a store must never persist.
pub fn validate_note(note: &Note) -> Result<(), StoreError> {
    if note.id.as_str().is_empty() {
        return Err(StoreError::InvalidNote {
            message: "note id is empty".to_string(),
        });
    }
    if note.title.is_empty() {
        return Err(StoreError::InvalidNote {
            message: "title is empty".to_string(),
        });
    }
    Ok(())
}

/// Updated timestamp for a save: never earlier than the clock, the note's own
/// stamps, or the previously stored version.
pub fn next_updated_at(note: &Note, previous: Option<&Note>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous.map(|prev| prev.updated_at).unwrap_or(note.created_at);
    now.max(note.updated_at).max(note.created_at).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn updated_at_never_goes_backwards() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let note = Note::new("T", "C");
        let mut previous = note.clone();
        previous.updated_at = now + Duration::hours(1);

        assert_eq!(next_updated_at(&note, Some(&previous), now), previous.updated_at.max(note.updated_at));
    }

    #[test]
    fn empty_title_is_invalid() {
        let note = Note::new("", "C");
        assert!(matches!(
            validate_note(&note),
            Err(StoreError::InvalidNote { .. })
        ));
        assert!(validate_note(&Note::new("   ", "C")).is_ok());
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = StoreError::NotFound {
            id: NoteId::from("42"),
        };
        assert_eq!(err.to_string(), "note not found: 42");
    }
}
