//! Module factory: packages initial state, action creators and a draft
//! reducer into one [`CreatedModule`].

use std::fmt;
use std::sync::Arc;

use crate::module::action::ActionMap;
use crate::module::draft::Draft;
use crate::mvi::{FeatureState, Intent, Reducer};
use crate::state::{StateNode, StateValue};

type Recipe<S, A> = Box<dyn Fn(&mut Draft<'_, S>, &A) + Send + Sync>;

/// Input to [`create`]: one feature's building blocks.
pub struct ModuleDef<S, A> {
    initial_state: Box<dyn FnOnce() -> S>,
    actions: ActionMap<A>,
    reducer: Option<Recipe<S, A>>,
}

impl<S: FeatureState, A: Intent> ModuleDef<S, A> {
    pub fn new<F>(initial_state: F, actions: ActionMap<A>) -> Self
    where
        F: FnOnce() -> S + 'static,
    {
        Self {
            initial_state: Box::new(initial_state),
            actions,
            reducer: None,
        }
    }

    /// Reducer body run against a copy-on-write draft of the prior state.
    pub fn reducer<F>(mut self, reducer: F) -> Self
    where
        F: Fn(&mut Draft<'_, S>, &A) + Send + Sync + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }
}

/// Finalized reducer of one module, closed over its initial state.
pub struct ModuleReducer<A> {
    reduce: Arc<dyn Fn(&StateNode, &A) -> StateNode + Send + Sync>,
    seed: StateNode,
}

impl<A> Clone for ModuleReducer<A> {
    fn clone(&self) -> Self {
        Self {
            reduce: Arc::clone(&self.reduce),
            seed: self.seed.clone(),
        }
    }
}

impl<A: Intent> Reducer<A> for ModuleReducer<A> {
    fn reduce(&self, prior: &StateNode, action: &A) -> StateNode {
        (self.reduce)(prior, action)
    }

    fn initial_state(&self) -> StateNode {
        self.seed.clone()
    }
}

/// A feature module ready to be placed in a module tree.
pub struct CreatedModule<A> {
    actions: ActionMap<A>,
    reducer: Option<ModuleReducer<A>>,
}

impl<A: Intent> CreatedModule<A> {
    pub fn actions(&self) -> &ActionMap<A> {
        &self.actions
    }

    /// `None` when the module declares actions but owns no state.
    pub fn reducer(&self) -> Option<&ModuleReducer<A>> {
        self.reducer.as_ref()
    }
}

impl<A> Clone for CreatedModule<A> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            reducer: self.reducer.clone(),
        }
    }
}

impl<A> fmt::Debug for CreatedModule<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatedModule")
            .field("actions", &self.actions)
            .field("reducer", &self.reducer.is_some())
            .finish()
    }
}

/// Builds a [`CreatedModule`].
///
/// The initial state is evaluated here, exactly once. Without a reducer the
/// module's `reducer` is `None`.
pub fn create<S: FeatureState, A: Intent>(def: ModuleDef<S, A>) -> CreatedModule<A> {
    let ModuleDef {
        initial_state,
        actions,
        reducer,
    } = def;

    let initial = Arc::new(initial_state());
    CreatedModule {
        actions,
        reducer: reducer.map(|recipe| produce(recipe, initial)),
    }
}

/// Wraps a draft-mutating recipe into a copy-on-write reducer.
///
/// The prior value is copied only when the recipe first writes to the draft;
/// a draft that was never written returns the prior node so parents can keep
/// sharing it.
fn produce<S: FeatureState, A: Intent>(recipe: Recipe<S, A>, initial: Arc<S>) -> ModuleReducer<A> {
    let seed = StateNode::Value(StateValue::from_arc(Arc::clone(&initial)));
    let base_seed = seed.clone();

    let reduce = move |prior: &StateNode, action: &A| -> StateNode {
        let (base, current) = match prior.downcast_ref::<S>() {
            Some(current) => (prior, current),
            None => {
                if !prior.is_absent() {
                    tracing::warn!(
                        expected = std::any::type_name::<S>(),
                        found = ?prior,
                        "prior state has another type, reseeding"
                    );
                }
                (&base_seed, initial.as_ref())
            }
        };

        let mut draft = Draft::new(current);
        recipe(&mut draft, action);

        match draft.into_modified() {
            Some(next) => StateNode::value(next),
            None => base.clone(),
        }
    };

    ModuleReducer {
        reduce: Arc::new(reduce),
        seed,
    }
}
