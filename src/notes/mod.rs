//! Note data types and the persistence contract.
//!
//! The state machine in [`crate::ui::notes`] never talks to the disk
//! directly: it emits commands that the dispatcher runs against a
//! [`NoteStore`]. Two stores ship with the crate:
//!
//! - [`FileNoteStore`] - one markdown file per note, used by the binary
//! - [`InMemoryNoteStore`] - a reference store for tests

pub mod fs;
pub mod memory;
pub mod note;
pub mod store;

pub use fs::FileNoteStore;
pub use memory::InMemoryNoteStore;
pub use note::{Note, NoteDraft, NoteId};
pub use store::{NoteStore, SharedStore, StoreError};
