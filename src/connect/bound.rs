use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ModuleError;
use crate::module::ActionMap;
use crate::mvi::Intent;
use crate::store::StoreContext;

/// Action creators wrapped so that calling one dispatches its result.
pub struct BoundActions<A: Intent> {
    actions: ActionMap<A>,
    store: Arc<dyn StoreContext<A>>,
}

impl<A: Intent> BoundActions<A> {
    pub fn bind(actions: ActionMap<A>, store: Arc<dyn StoreContext<A>>) -> Self {
        Self { actions, store }
    }

    /// Creates the named action and dispatches it to the store.
    pub fn call(&self, name: &str, args: Value) -> Result<(), ModuleError> {
        let dispatched = self.actions.create(name, args)?;
        tracing::trace!(action = %name, kind = dispatched.kind(), "dispatching bound action");
        self.store.dispatch(dispatched);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.names()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<A: Intent> Clone for BoundActions<A> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<A: Intent> fmt::Debug for BoundActions<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundActions").field(&self.actions).finish()
    }
}
