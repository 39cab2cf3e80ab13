//! Reducer trait for MVI architecture.

use super::command::Command;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, [Command])
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The side effects this reducer may request.
    type Command: Command;

    /// Process an intent and return the new state plus the commands to run.
    ///
    /// This should be a pure function with no side effects: the same state
    /// and intent always yield the same result.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Command>);
}
