//! Unidirectional data flow primitives.
//!
//! Every feature module plugs into the same loop:
//!
//! ```text
//! Intent ──→ Reducer ──→ StateNode ──→ Component
//!    ↑                                    │
//!    └────────────────────────────────────┘
//! ```
//!
//! - **FeatureState**: immutable per-feature state, stored in the state tree
//! - **Intent**: the application-wide action type
//! - **Reducer**: pure `(prior, action) -> next` over the state tree

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::FeatureState;
