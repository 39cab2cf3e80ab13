use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Opaque, collision-free note identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted note.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Where the store keeps this note. Owned by the store, never interpreted
    /// by the UI.
    pub location: Option<String>,
}

impl Note {
    /// Create a brand-new note with a generated id, stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteDraft::new(title, content).into_note(Utc::now())
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }

    /// Title suitable for display; empty titles read as "(untitled)".
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        }
    }

    /// A draft carrying this note's identity, for re-saving edited text.
    pub fn to_draft(&self, title: impl Into<String>, content: impl Into<String>) -> NoteDraft {
        NoteDraft {
            id: Some(self.id.clone()),
            title: title.into(),
            content: content.into(),
            created_at: Some(self.created_at),
        }
    }
}

/// Title and content waiting to be persisted.
///
/// Drafts carry no clock reading and, for new notes, no id: both are
/// assigned when the draft is turned into a [`Note`] outside the reducer,
/// which keeps state transitions deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            created_at: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Materialize the draft, generating an id for new notes.
    pub fn into_note(self, now: DateTime<Utc>) -> Note {
        let created_at = self.created_at.unwrap_or(now);
        Note {
            id: self.id.unwrap_or_else(NoteId::generate),
            title: self.title,
            content: self.content,
            created_at,
            updated_at: now.max(created_at),
            location: None,
        }
    }
}
