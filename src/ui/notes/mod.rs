//! Notebook state machine.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Mode discriminant plus per-mode data, loaded notes, text fields
//! - `intent.rs` - Key presses, resizes and completed store operations
//! - `command.rs` - Store operations and quit, executed by the dispatcher
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `sort.rs` - The six note orderings

mod command;
mod intent;
mod reducer;
mod sort;
mod state;

pub use command::{NotesCommand, StoreCommand};
pub use intent::NotesIntent;
pub use reducer::{NotesReducer, EMPTY_TITLE_ERROR};
pub use sort::sort_notes;
pub use state::{
    CreateStep, FieldLimits, Focus, Mode, NotesState, Screen, SearchState, SortMode,
    DEFAULT_CONTENT_CHAR_LIMIT, DEFAULT_TITLE_CHAR_LIMIT,
};
