//! Base trait for per-feature state.

/// Marker trait for state owned by a single feature module.
///
/// States should be:
/// - Immutable (Clone to copy the draft on its first write)
/// - Shareable (stored behind `Arc` in the state tree)
///
/// Large fields that a reducer rarely touches belong in an `Arc` so a
/// copied draft shares them with the prior state.
pub trait FeatureState: Clone + Send + Sync + 'static {}
