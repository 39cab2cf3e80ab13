//! Ordering of the loaded notes.

use std::cmp::Ordering;

use crate::notes::Note;
use crate::ui::notes::state::SortMode;

/// Sort by the key `mode` selects, then by id, so every mode is a total
/// order and the result never depends on the previous ordering. Titles
/// compare case-insensitively.
pub fn sort_notes(notes: &mut [Note], mode: SortMode) {
    notes.sort_by(|a, b| compare(a, b, mode).then_with(|| a.id.cmp(&b.id)));
}

fn compare(a: &Note, b: &Note, mode: SortMode) -> Ordering {
    match mode {
        SortMode::UpdatedDesc => b.updated_at.cmp(&a.updated_at),
        SortMode::UpdatedAsc => a.updated_at.cmp(&b.updated_at),
        SortMode::CreatedDesc => b.created_at.cmp(&a.created_at),
        SortMode::CreatedAsc => a.created_at.cmp(&b.created_at),
        SortMode::TitleAsc => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortMode::TitleDesc => b.title.to_lowercase().cmp(&a.title.to_lowercase()),
    }
}
