//! Reducer trait shared by module reducers and composed reducers.

use crate::state::StateNode;

use super::intent::Intent;

/// Reducer transforms the state tree based on actions.
///
/// It must be a pure function: (StateNode, Action) -> StateNode.
/// Returning a node that is [`StateNode::ptr_eq`] to `prior` means
/// "nothing changed".
pub trait Reducer<A: Intent> {
    /// Process an action and return the next state.
    fn reduce(&self, prior: &StateNode, action: &A) -> StateNode;

    /// State produced before any action has been dispatched.
    fn initial_state(&self) -> StateNode;
}
