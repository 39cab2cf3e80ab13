pub mod app;
pub mod dispatcher;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notes;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod text_field;
pub mod theme;
pub mod view;
