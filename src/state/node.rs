use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::mvi::FeatureState;

/// One feature's state, type-erased for storage in the tree.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StateValue {
    pub fn new<S: FeatureState>(value: S) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<S>(),
        }
    }

    pub(crate) fn from_arc<S: FeatureState>(value: Arc<S>) -> Self {
        Self {
            inner: value,
            type_name: std::any::type_name::<S>(),
        }
    }

    pub fn downcast_ref<S: 'static>(&self) -> Option<&S> {
        self.inner.downcast_ref::<S>()
    }

    /// Name of the concrete state type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn ptr_eq(&self, other: &StateValue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.type_name)
    }
}

/// A node of the application state tree.
#[derive(Clone, Default)]
pub enum StateNode {
    /// No state under this key (never reduced, or owned by no reducer).
    #[default]
    Absent,
    /// State owned by one module reducer.
    Value(StateValue),
    /// Namespace level: one child per key of the module tree.
    Branch(Arc<BTreeMap<String, StateNode>>),
}

impl StateNode {
    pub fn value<S: FeatureState>(value: S) -> Self {
        StateNode::Value(StateValue::new(value))
    }

    pub fn branch<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, StateNode)>,
    {
        StateNode::Branch(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, StateNode::Absent)
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, StateNode::Branch(_))
    }

    /// Typed view of a `Value` node. `None` for other variants or another type.
    pub fn downcast_ref<S: 'static>(&self) -> Option<&S> {
        match self {
            StateNode::Value(value) => value.downcast_ref::<S>(),
            _ => None,
        }
    }

    /// Child under `key` when this node is a branch.
    pub fn get(&self, key: &str) -> Option<&StateNode> {
        match self {
            StateNode::Branch(children) => children.get(key),
            _ => None,
        }
    }

    /// Walks a dotted path such as `"settings.dialog"`.
    pub fn at(&self, path: &str) -> Option<&StateNode> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.')
            .try_fold(self, |node, segment| node.get(segment))
    }

    /// Typed lookup at a dotted path.
    pub fn select<S: 'static>(&self, path: &str) -> Option<&S> {
        self.at(path).and_then(StateNode::downcast_ref::<S>)
    }

    /// Keys of a branch in order; empty for other variants.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            StateNode::Branch(children) => children.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Identity comparison: true when both nodes share the same storage.
    ///
    /// Composed reducers return the prior node when nothing changed, so this
    /// is the "did anything change" check.
    pub fn ptr_eq(&self, other: &StateNode) -> bool {
        match (self, other) {
            (StateNode::Absent, StateNode::Absent) => true,
            (StateNode::Value(a), StateNode::Value(b)) => a.ptr_eq(b),
            (StateNode::Branch(a), StateNode::Branch(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for StateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateNode::Absent => f.write_str("Absent"),
            StateNode::Value(value) => write!(f, "Value({:?})", value),
            StateNode::Branch(children) => f.debug_map().entries(children.iter()).finish(),
        }
    }
}
