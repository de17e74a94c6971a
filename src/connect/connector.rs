use std::sync::Arc;

use crate::config::ThuxConfig;
use crate::connect::bound::BoundActions;
use crate::error::ModuleError;
use crate::module::ActionMap;
use crate::mvi::Intent;
use crate::state::StateNode;
use crate::store::StoreContext;

type Selector<SP> = Arc<dyn Fn(&StateNode) -> SP + Send + Sync>;

/// Props handed to a connected component.
#[derive(Debug)]
pub struct Props<SP, A: Intent> {
    /// Projection of the root state.
    pub rs: SP,
    /// Merged, bound action creators; `None` when no maps were given.
    pub action: Option<BoundActions<A>>,
}

/// Something that renders from [`Props`].
pub trait Component<SP, A: Intent> {
    type Output;

    fn render(&self, props: &Props<SP, A>) -> Self::Output;
}

impl<F, SP, A, O> Component<SP, A> for F
where
    A: Intent,
    F: Fn(&Props<SP, A>) -> O,
{
    type Output = O;

    fn render(&self, props: &Props<SP, A>) -> O {
        self(props)
    }
}

/// Selector and action maps waiting for a component.
pub struct Connector<SP, A> {
    selector: Selector<SP>,
    actions: Option<Vec<ActionMap<A>>>,
}

/// Connects with a state selector.
pub fn connect<SP, A, F>(selector: F, actions: Option<Vec<ActionMap<A>>>) -> Connector<SP, A>
where
    A: Intent,
    F: Fn(&StateNode) -> SP + Send + Sync + 'static,
{
    Connector {
        selector: Arc::new(selector),
        actions,
    }
}

/// Connects to the whole root state.
pub fn connect_root<A: Intent>(actions: Option<Vec<ActionMap<A>>>) -> Connector<StateNode, A> {
    connect(|root: &StateNode| root.clone(), actions)
}

impl<SP, A: Intent> Connector<SP, A> {
    /// Binds a component. Duplicate action names resolve last-write-wins.
    pub fn bind<C>(self, component: C) -> Connected<C, SP, A> {
        let actions = self.actions.map(ActionMap::merge_last_write_wins);
        Connected {
            component,
            selector: self.selector,
            actions,
        }
    }

    /// Binds a component using the configured collision policy.
    pub fn bind_with<C>(
        self,
        component: C,
        config: &ThuxConfig,
    ) -> Result<Connected<C, SP, A>, ModuleError> {
        let actions = match self.actions {
            Some(maps) => Some(ActionMap::merge(maps, config.wiring.collisions)?),
            None => None,
        };
        Ok(Connected {
            component,
            selector: self.selector,
            actions,
        })
    }
}

/// A component bound to a state projection and (optionally) actions.
pub struct Connected<C, SP, A> {
    component: C,
    selector: Selector<SP>,
    actions: Option<ActionMap<A>>,
}

impl<C, SP, A: Intent> Connected<C, SP, A> {
    pub fn component(&self) -> &C {
        &self.component
    }

    /// The merged action map before binding to a store.
    pub fn actions(&self) -> Option<&ActionMap<A>> {
        self.actions.as_ref()
    }

    pub fn project(&self, root: &StateNode) -> SP {
        (self.selector)(root)
    }

    pub fn bind_actions(&self, store: &Arc<dyn StoreContext<A>>) -> Option<BoundActions<A>> {
        self.actions
            .as_ref()
            .map(|actions| BoundActions::bind(actions.clone(), Arc::clone(store)))
    }

    /// Props for the given root state. Called by the store binding whenever
    /// the root state changes.
    pub fn props(&self, root: &StateNode, store: &Arc<dyn StoreContext<A>>) -> Props<SP, A> {
        Props {
            rs: self.project(root),
            action: self.bind_actions(store),
        }
    }

    /// Renders the component against the store's current state.
    pub fn render(&self, store: &Arc<dyn StoreContext<A>>) -> C::Output
    where
        C: Component<SP, A>,
    {
        let root = store.state();
        let props = self.props(&root, store);
        self.component.render(&props)
    }
}
