//! File-per-note store.
//!
//! Each note lives in `<notes_dir>/<id>.md`:
//!
//! ```text
//! # <title>
//!
//! <content>
//! ```
//!
//! Creation and update times come from the file's birth and modification
//! times. Files that cannot be parsed are skipped with a warning so one bad
//! file never hides the rest of the notebook.

use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::notes::note::{Note, NoteId};
use crate::notes::store::{next_updated_at, validate_note, NoteStore, StoreError};

const EXTENSION: &str = "md";
const TITLE_PREFIX: &str = "# ";

pub struct FileNoteStore {
    notes_dir: PathBuf,
}

impl FileNoteStore {
    /// Open a store rooted at `notes_dir`, creating the directory if needed.
    pub fn open(notes_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let notes_dir = notes_dir.into();
        fs::create_dir_all(&notes_dir)
            .map_err(|e| StoreError::io("create notes directory", &notes_dir, e))?;
        Ok(Self { notes_dir })
    }

    /// `~/.leaf/notes`, when a home directory is known.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".leaf").join("notes"))
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    fn note_path(&self, id: &NoteId) -> Result<PathBuf, StoreError> {
        let raw = id.as_str();
        let unsafe_id = raw.is_empty()
            || raw.starts_with('.')
            || raw.contains(['/', '\\'])
            || raw.contains("..");
        if unsafe_id {
            return Err(StoreError::InvalidNote {
                message: format!("note id '{raw}' is not a valid file name"),
            });
        }
        Ok(self.notes_dir.join(format!("{raw}.{EXTENSION}")))
    }

    fn read_note(&self, path: &Path) -> Result<Note, StoreError> {
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(NoteId::from)
            .ok_or_else(|| StoreError::InvalidNote {
                message: format!("'{}' has no usable file name", path.display()),
            })?;
        let raw = fs::read_to_string(path).map_err(|e| StoreError::io("read note", path, e))?;
        let metadata = fs::metadata(path).map_err(|e| StoreError::io("stat note", path, e))?;
        let modified = metadata
            .modified()
            .map_err(|e| StoreError::io("stat note", path, e))?;
        let created = metadata.created().unwrap_or(modified).min(modified);

        let (title, content) = parse_note_file(&raw);
        Ok(Note {
            id,
            title,
            content,
            created_at: DateTime::<Utc>::from(created),
            updated_at: DateTime::<Utc>::from(modified),
            location: Some(path.display().to_string()),
        })
    }
}

impl NoteStore for FileNoteStore {
    fn list(&self) -> Result<Vec<Note>, StoreError> {
        let entries = fs::read_dir(&self.notes_dir)
            .map_err(|e| StoreError::io("read notes directory", &self.notes_dir, e))?;

        let mut notes = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| StoreError::io("read notes directory", &self.notes_dir, e))?;
            let path = entry.path();
            let is_note = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(EXTENSION);
            if !is_note {
                continue;
            }
            match self.read_note(&path) {
                Ok(note) => notes.push(note),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable note");
                }
            }
        }

        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    fn get(&self, id: &NoteId) -> Result<Note, StoreError> {
        let path = self.note_path(id)?;
        if !path.exists() {
            return Err(StoreError::NotFound { id: id.clone() });
        }
        self.read_note(&path)
    }

    fn save(&self, note: &Note) -> Result<Note, StoreError> {
        validate_note(note)?;
        let path = self.note_path(&note.id)?;
        let previous = if path.exists() {
            self.read_note(&path).ok()
        } else {
            None
        };

        let mut saved = note.clone();
        saved.updated_at = next_updated_at(note, previous.as_ref(), Utc::now());
        if let Some(previous) = &previous {
            saved.created_at = previous.created_at.min(saved.created_at);
        }
        saved.location = Some(path.display().to_string());

        // Rewrite in place so the file keeps its birth time across edits.
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| StoreError::io("write note", &path, e))?;
        file.write_all(format_note_file(&saved.title, &saved.content).as_bytes())
            .map_err(|e| StoreError::io("write note", &path, e))?;
        file.set_modified(SystemTime::from(saved.updated_at))
            .map_err(|e| StoreError::io("stamp note", &path, e))?;
        file.sync_all()
            .map_err(|e| StoreError::io("flush note", &path, e))?;

        tracing::debug!(id = %saved.id, path = %path.display(), "note saved");
        Ok(saved)
    }

    fn delete(&self, id: &NoteId) -> Result<(), StoreError> {
        let path = self.note_path(id)?;
        if !path.exists() {
            return Err(StoreError::NotFound { id: id.clone() });
        }
        fs::remove_file(&path).map_err(|e| StoreError::io("delete note", &path, e))?;
        tracing::debug!(id = %id, "note deleted");
        Ok(())
    }
}

/// Render a note in its on-disk format.
pub fn format_note_file(title: &str, content: &str) -> String {
    format!("{TITLE_PREFIX}{title}\n\n{content}")
}

/// Split file contents into `(title, content)`.
///
/// A first line of `# <title>` supplies the title and the remaining text,
/// trimmed, is the content. Files without a heading have an empty title and
/// their whole text as content.
pub fn parse_note_file(raw: &str) -> (String, String) {
    let (first, rest) = raw.split_once('\n').unwrap_or((raw, ""));
    match first.trim_end_matches('\r').strip_prefix(TITLE_PREFIX) {
        Some(title) => (title.to_string(), rest.trim().to_string()),
        None => (String::new(), raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_heading_and_body() {
        let (title, content) = parse_note_file("# Groceries\n\nMilk, eggs\n");
        assert_eq!(title, "Groceries");
        assert_eq!(content, "Milk, eggs");
    }

    #[test]
    fn parse_heading_only() {
        let (title, content) = parse_note_file("# Just a title");
        assert_eq!(title, "Just a title");
        assert_eq!(content, "");
    }

    #[test]
    fn parse_without_heading_keeps_everything_as_content() {
        let (title, content) = parse_note_file("plain text\nsecond line");
        assert_eq!(title, "");
        assert_eq!(content, "plain text\nsecond line");
    }

    #[test]
    fn format_then_parse_recovers_title() {
        let raw = format_note_file("T", "line one\n\nline two");
        assert_eq!(raw, "# T\n\nline one\n\nline two");
        assert_eq!(
            parse_note_file(&raw),
            ("T".to_string(), "line one\n\nline two".to_string())
        );
    }
}
