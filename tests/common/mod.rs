//! Shared fixtures: a small app wired from modules and a test store.

#![allow(dead_code, unused_imports)]

use std::mem;
use std::sync::Arc;

use futures_core::future::BoxFuture;
use parking_lot::Mutex;
use thux::{
    create, ActionMap, ComposedReducer, CreatedModule, Dispatched, Draft, FeatureState, Intent,
    ModuleDef, Reducer, StateNode, StoreContext,
};

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Increment,
    Add(i64),
    AddTodo(String),
    Login(String),
    Logout,
}

impl Intent for AppAction {}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Counter {
    pub value: i64,
}

impl FeatureState for Counter {}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Todos {
    pub items: Vec<String>,
}

impl FeatureState for Todos {}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user: Option<String>,
}

impl FeatureState for Session {}

pub fn counter_actions() -> ActionMap<AppAction> {
    ActionMap::new()
        .with("increment", |_| Dispatched::Action(AppAction::Increment))
        .with("add", |args| {
            Dispatched::Action(AppAction::Add(args.as_i64().unwrap_or_default()))
        })
}

pub fn counter_module() -> CreatedModule<AppAction> {
    create(
        ModuleDef::new(Counter::default, counter_actions()).reducer(
            |draft: &mut Draft<Counter>, action| match action {
                AppAction::Increment => draft.value += 1,
                AppAction::Add(n) => draft.value += n,
                _ => {}
            },
        ),
    )
}

pub fn todos_module() -> CreatedModule<AppAction> {
    create(
        ModuleDef::new(
            Todos::default,
            ActionMap::new().with("add_todo", |args| {
                Dispatched::Action(AppAction::AddTodo(
                    args.as_str().unwrap_or_default().to_string(),
                ))
            }),
        )
        .reducer(|draft: &mut Draft<Todos>, action| {
            if let AppAction::AddTodo(item) = action {
                draft.items.push(item.clone());
            }
        }),
    )
}

pub fn session_module() -> CreatedModule<AppAction> {
    create(
        ModuleDef::new(
            Session::default,
            ActionMap::new()
                .with("login", |args| {
                    Dispatched::Action(AppAction::Login(
                        args.as_str().unwrap_or("guest").to_string(),
                    ))
                })
                .with("logout", |_| Dispatched::Action(AppAction::Logout)),
        )
        .reducer(|draft: &mut Draft<Session>, action| match action {
            AppAction::Login(user) => draft.user = Some(user.clone()),
            AppAction::Logout => draft.user = None,
            _ => {}
        }),
    )
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analytics;

impl FeatureState for Analytics {}

/// Module that only exposes actions.
pub fn analytics_module() -> CreatedModule<AppAction> {
    create(ModuleDef::new(
        Analytics::default,
        ActionMap::new().with("track", |_| Dispatched::Action(AppAction::Increment)),
    ))
}

/// Store that reduces plain actions, runs thunks inline and parks futures
/// until [`TestStore::settle`].
pub struct TestStore {
    reducer: ComposedReducer<AppAction>,
    state: Mutex<StateNode>,
    log: Mutex<Vec<&'static str>>,
    pending: Mutex<Vec<BoxFuture<'static, AppAction>>>,
}

impl TestStore {
    pub fn new(reducer: ComposedReducer<AppAction>) -> Arc<Self> {
        thux::logging::init_tracing();
        let state = reducer.initial_state();
        Arc::new(Self {
            reducer,
            state: Mutex::new(state),
            log: Mutex::new(Vec::new()),
            pending: Mutex::new(Vec::new()),
        })
    }

    /// Kinds of everything dispatched so far, in order.
    pub fn log(&self) -> Vec<&'static str> {
        self.log.lock().clone()
    }

    /// Awaits parked futures and dispatches their actions.
    pub async fn settle(&self) {
        let pending = mem::take(&mut *self.pending.lock());
        for future in pending {
            let action = future.await;
            self.dispatch(Dispatched::Action(action));
        }
    }
}

impl StoreContext<AppAction> for TestStore {
    fn dispatch(&self, action: Dispatched<AppAction>) {
        self.log.lock().push(action.kind());
        match action {
            Dispatched::Action(action) => {
                let mut state = self.state.lock();
                *state = self.reducer.reduce(&state, &action);
            }
            Dispatched::Thunk(thunk) => {
                let next = thunk(self);
                self.dispatch(next);
            }
            Dispatched::Future(future) => self.pending.lock().push(future),
        }
    }

    fn state(&self) -> StateNode {
        self.state.lock().clone()
    }
}
