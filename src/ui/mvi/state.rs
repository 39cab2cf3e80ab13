//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Replaced wholesale on every transition, never patched from outside a reducer
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes and replaying transitions in tests)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
