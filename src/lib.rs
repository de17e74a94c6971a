//! Feature-module wiring for reducer-driven state.
//!
//! - [`create`] packages a feature's initial state, action creators and
//!   draft reducer into a [`CreatedModule`].
//! - [`extract_reducers`] walks a [`ModuleTree`] and composes one root
//!   reducer whose state mirrors the tree's namespaces.
//! - [`connect`] binds a component to a state projection and bound actions.
//!
//! ```
//! use thux::{
//!     create, extract_reducers, ActionMap, Dispatched, Draft, FeatureState, Intent, ModuleDef,
//!     ModuleTree, Reducer,
//! };
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! impl FeatureState for Counter {}
//!
//! enum AppAction {
//!     Add(i64),
//! }
//!
//! impl Intent for AppAction {}
//!
//! let counter = create(
//!     ModuleDef::new(
//!         Counter::default,
//!         ActionMap::new().with("add", |args| {
//!             Dispatched::Action(AppAction::Add(args.as_i64().unwrap_or(1)))
//!         }),
//!     )
//!     .reducer(|draft: &mut Draft<Counter>, action| match action {
//!         AppAction::Add(n) => draft.value += n,
//!     }),
//! );
//!
//! let tree = ModuleTree::branch([(
//!     "features",
//!     ModuleTree::branch([("counter", ModuleTree::Leaf(counter))]),
//! )]);
//! let root = extract_reducers(&tree)?;
//!
//! let state = root.reduce(&root.initial_state(), &AppAction::Add(2));
//! assert_eq!(
//!     state.select::<Counter>("features.counter"),
//!     Some(&Counter { value: 2 })
//! );
//! # Ok::<(), thux::ModuleError>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod connect;
pub mod error;
pub mod logging;
pub mod module;
pub mod mvi;
pub mod state;
pub mod store;

pub use aggregate::{extract_reducers, extract_reducers_with, ComposedReducer};
pub use config::{CollisionPolicy, ConfigError, ThuxConfig, WiringConfig};
pub use connect::{connect, connect_root, BoundActions, Component, Connected, Connector, Props};
pub use error::ModuleError;
pub use module::{
    create, ActionCreator, ActionMap, CreatedModule, Dispatched, Draft, ModuleDef, ModuleReducer,
    ModuleTree, Thunk,
};
pub use mvi::{FeatureState, Intent, Reducer};
pub use state::{StateNode, StateShape, StateValue};
pub use store::StoreContext;
