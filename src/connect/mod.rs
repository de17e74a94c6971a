//! Component bindings.
//!
//! A [`Connector`] pairs a state selector with merged action maps; binding a
//! component yields a [`Connected`] that computes the component's props from
//! the root state and an explicitly passed store.

mod bound;
mod connector;

pub use bound::BoundActions;
pub use connector::{connect, connect_root, Component, Connected, Connector, Props};
