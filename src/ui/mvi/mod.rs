//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Command ──→ Dispatcher
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or completed command results
//! - **Command**: Description of a side effect for the runtime to perform
//! - **Reducer**: Pure function that transforms state based on intents

mod command;
mod intent;
mod reducer;
mod state;

pub use command::Command;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
