//! Base trait for commands (deferred side effects) in MVI architecture.

/// Marker trait for command objects.
///
/// Commands describe work the reducer wants done but must not do itself:
/// storage access, quitting the process. The runtime executes them and
/// feeds each outcome back as an intent.
pub trait Command: Send + 'static {}
