//! Persistent state tree produced by composed reducers.
//!
//! A [`StateNode`] is cheap to clone: feature state lives behind `Arc`, and
//! branches share unchanged children with the node they were derived from.

mod node;
mod shape;

pub use node::{StateNode, StateValue};
pub use shape::StateShape;
