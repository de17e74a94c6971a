//! Action creators and action maps.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use futures_core::future::BoxFuture;
use serde_json::Value;

use crate::config::CollisionPolicy;
use crate::error::ModuleError;
use crate::mvi::Intent;
use crate::store::StoreContext;

/// Deferred action: runs against the store and yields what to dispatch next.
pub type Thunk<A> = Box<dyn FnOnce(&dyn StoreContext<A>) -> Dispatched<A> + Send>;

/// What an action creator returns.
pub enum Dispatched<A> {
    /// Plain action, reduced immediately.
    Action(A),
    /// Action available once the future resolves.
    Future(BoxFuture<'static, A>),
    /// Function of the store, run by the store's thunk handling.
    Thunk(Thunk<A>),
}

impl<A: Intent> Dispatched<A> {
    pub fn future<F>(future: F) -> Self
    where
        F: std::future::Future<Output = A> + Send + 'static,
    {
        Dispatched::Future(Box::pin(future))
    }

    pub fn thunk<F>(thunk: F) -> Self
    where
        F: FnOnce(&dyn StoreContext<A>) -> Dispatched<A> + Send + 'static,
    {
        Dispatched::Thunk(Box::new(thunk))
    }

    /// The plain action, if this is one.
    pub fn into_action(self) -> Option<A> {
        match self {
            Dispatched::Action(action) => Some(action),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Dispatched::Action(_) => "action",
            Dispatched::Future(_) => "future",
            Dispatched::Thunk(_) => "thunk",
        }
    }
}

impl<A> From<A> for Dispatched<A> {
    fn from(action: A) -> Self {
        Dispatched::Action(action)
    }
}

impl<A: fmt::Debug> fmt::Debug for Dispatched<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatched::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Dispatched::Future(_) => f.write_str("Future(..)"),
            Dispatched::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}

/// A named action creator. Arguments arrive as JSON.
pub struct ActionCreator<A> {
    create: Arc<dyn Fn(Value) -> Dispatched<A> + Send + Sync>,
}

impl<A: Intent> ActionCreator<A> {
    pub fn new<F>(create: F) -> Self
    where
        F: Fn(Value) -> Dispatched<A> + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(create),
        }
    }

    pub fn call(&self, args: Value) -> Dispatched<A> {
        (self.create)(args)
    }

    pub fn ptr_eq(&self, other: &ActionCreator<A>) -> bool {
        Arc::ptr_eq(&self.create, &other.create)
    }
}

impl<A> Clone for ActionCreator<A> {
    fn clone(&self) -> Self {
        Self {
            create: Arc::clone(&self.create),
        }
    }
}

/// Action creators of one module, keyed by name.
pub struct ActionMap<A> {
    creators: BTreeMap<String, ActionCreator<A>>,
}

impl<A: Intent> ActionMap<A> {
    pub fn new() -> Self {
        Self {
            creators: BTreeMap::new(),
        }
    }

    /// Builder form of [`ActionMap::insert`].
    pub fn with<F>(mut self, name: impl Into<String>, create: F) -> Self
    where
        F: Fn(Value) -> Dispatched<A> + Send + Sync + 'static,
    {
        self.insert(name, ActionCreator::new(create));
        self
    }

    /// Adds a creator, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        creator: ActionCreator<A>,
    ) -> Option<ActionCreator<A>> {
        self.creators.insert(name.into(), creator)
    }

    pub fn get(&self, name: &str) -> Option<&ActionCreator<A>> {
        self.creators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    /// Runs a creator without dispatching its result.
    pub fn create(&self, name: &str, args: Value) -> Result<Dispatched<A>, ModuleError> {
        self.get(name)
            .map(|creator| creator.call(args))
            .ok_or_else(|| ModuleError::UnknownAction {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionCreator<A>)> {
        self.creators.iter().map(|(name, creator)| (name.as_str(), creator))
    }

    /// Shallow-merges maps in order.
    ///
    /// With [`CollisionPolicy::LastWriteWins`] a later map overwrites earlier
    /// names; with [`CollisionPolicy::Reject`] the first repeated name fails.
    pub fn merge<I>(maps: I, policy: CollisionPolicy) -> Result<Self, ModuleError>
    where
        I: IntoIterator<Item = ActionMap<A>>,
    {
        match policy {
            CollisionPolicy::LastWriteWins => Ok(Self::merge_last_write_wins(maps)),
            CollisionPolicy::Reject => {
                let mut merged = ActionMap::new();
                for map in maps {
                    for (name, creator) in map.creators {
                        if merged.contains(&name) {
                            return Err(ModuleError::DuplicateAction { name });
                        }
                        merged.creators.insert(name, creator);
                    }
                }
                Ok(merged)
            }
        }
    }

    /// Shallow-merges maps in order; later maps overwrite earlier names.
    pub fn merge_last_write_wins<I>(maps: I) -> Self
    where
        I: IntoIterator<Item = ActionMap<A>>,
    {
        let mut merged = ActionMap::new();
        for map in maps {
            for (name, creator) in map.creators {
                if merged.contains(&name) {
                    tracing::debug!(action = %name, "action overridden by later map");
                }
                merged.creators.insert(name, creator);
            }
        }
        merged
    }
}

impl<A: Intent> Default for ActionMap<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for ActionMap<A> {
    fn clone(&self) -> Self {
        Self {
            creators: self.creators.clone(),
        }
    }
}

impl<A> fmt::Debug for ActionMap<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.creators.keys()).finish()
    }
}
