//! Seam to the external store.
//!
//! Dispatch, middleware and subscriptions belong to whatever store the
//! application runs; bindings and thunks reach it only through this trait.

use crate::module::Dispatched;
use crate::state::StateNode;

/// Access to a running store, passed explicitly to bindings and thunks.
pub trait StoreContext<A>: Send + Sync {
    /// Hands an action (plain, future or thunk) to the store.
    fn dispatch(&self, action: Dispatched<A>);

    /// Current root state.
    fn state(&self) -> StateNode;
}
