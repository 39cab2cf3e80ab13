//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - System events (terminal resize)
/// - Results of commands that finished asynchronously
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
