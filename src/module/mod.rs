//! Feature modules: action creators, the module factory and module trees.

mod action;
mod create;
mod draft;
mod tree;

pub use action::{ActionCreator, ActionMap, Dispatched, Thunk};
pub use create::{create, CreatedModule, ModuleDef, ModuleReducer};
pub use draft::Draft;
pub use tree::ModuleTree;
