//! leaf: a keyboard-driven terminal notebook.
//!
//! The notebook is a pure state machine ([`ui::notes`]) driven by a small
//! runtime ([`ui::runtime`]) that performs store I/O on its behalf.

pub mod cli;
pub mod config;
pub mod logging;
pub mod notes;
pub mod shutdown;
pub mod ui;
