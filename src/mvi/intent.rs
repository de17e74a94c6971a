//! Base trait for actions flowing through composed reducers.

/// Marker trait for the application's action type.
///
/// One action type is shared by every module wired into the same tree:
/// - User actions (button clicks, key presses)
/// - System events (API responses, timers)
/// - Results of thunks and future actions
pub trait Intent: Send + Sync + 'static {}
