//! Tree aggregation: turns a [`ModuleTree`] into one composed reducer.
//!
//! Each namespace level becomes one reducer whose state is a branch with a
//! key per entry. Modules contribute their own reducer; modules without one
//! keep their key but never change it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::{ThuxConfig, WiringConfig};
use crate::error::ModuleError;
use crate::module::{ModuleReducer, ModuleTree};
use crate::mvi::{Intent, Reducer};
use crate::state::{StateNode, StateShape};

enum Slot<A> {
    Module(ModuleReducer<A>),
    NoOp,
    Nested(ComposedReducer<A>),
}

impl<A: Intent> Slot<A> {
    fn reduce(&self, prior: &StateNode, action: &A) -> StateNode {
        match self {
            Slot::Module(reducer) => reducer.reduce(prior, action),
            Slot::NoOp => prior.clone(),
            Slot::Nested(reducer) => reducer.reduce(prior, action),
        }
    }

    fn initial_state(&self) -> StateNode {
        match self {
            Slot::Module(reducer) => reducer.initial_state(),
            Slot::NoOp => StateNode::Absent,
            Slot::Nested(reducer) => reducer.initial_state(),
        }
    }

    fn shape(&self) -> StateShape {
        match self {
            Slot::Module(_) => StateShape::Slice,
            Slot::NoOp => StateShape::Empty,
            Slot::Nested(reducer) => reducer.shape(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Slot::Module(_) => "module",
            Slot::NoOp => "no-op",
            Slot::Nested(_) => "namespace",
        }
    }
}

/// Reducer for one namespace level and everything below it.
pub struct ComposedReducer<A> {
    // Sorted by key; `reduce` relies on it to compare with prior branches.
    slots: Arc<Vec<(String, Slot<A>)>>,
}

impl<A> Clone for ComposedReducer<A> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<A: Intent> ComposedReducer<A> {
    /// State shape this reducer produces.
    pub fn shape(&self) -> StateShape {
        StateShape::Branch(
            self.slots
                .iter()
                .map(|(key, slot)| (key.clone(), slot.shape()))
                .collect(),
        )
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(key, _)| key.as_str())
    }
}

impl<A: Intent> Reducer<A> for ComposedReducer<A> {
    fn reduce(&self, prior: &StateNode, action: &A) -> StateNode {
        let empty = BTreeMap::new();
        let prior_children = match prior {
            StateNode::Branch(children) => &**children,
            StateNode::Absent => &empty,
            StateNode::Value(value) => {
                tracing::warn!(
                    found = value.type_name(),
                    keys = self.slots.len(),
                    "namespace state holds a value, replacing it"
                );
                &empty
            }
        };

        let same_keys = prior_children
            .keys()
            .map(String::as_str)
            .eq(self.keys());
        if !same_keys {
            for key in prior_children.keys() {
                if !self.slots.iter().any(|(slot_key, _)| slot_key == key) {
                    tracing::debug!(key = %key, "dropping state key with no reducer");
                }
            }
        }

        let mut changed = !prior.is_branch() || !same_keys;
        let mut next = BTreeMap::new();
        for (key, slot) in self.slots.iter() {
            let before = prior_children.get(key).cloned().unwrap_or_default();
            let after = slot.reduce(&before, action);
            changed |= !after.ptr_eq(&before);
            next.insert(key.clone(), after);
        }

        if changed {
            StateNode::Branch(Arc::new(next))
        } else {
            prior.clone()
        }
    }

    fn initial_state(&self) -> StateNode {
        StateNode::branch(
            self.slots
                .iter()
                .map(|(key, slot)| (key.clone(), slot.initial_state())),
        )
    }
}

impl<A: Intent> fmt::Debug for ComposedReducer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(key, slot)| (key, slot.kind())))
            .finish()
    }
}

/// Aggregates a module tree into its root reducer with default settings.
pub fn extract_reducers<A: Intent>(tree: &ModuleTree<A>) -> Result<ComposedReducer<A>, ModuleError> {
    extract_reducers_with(tree, &ThuxConfig::default())
}

/// Aggregates a module tree into its root reducer.
///
/// Fails fast with `InvalidModuleShape`, naming the dotted key path, when the
/// root is a single module, a namespace is empty (unless allowed by config),
/// or a segment is empty or contains a `.`.
pub fn extract_reducers_with<A: Intent>(
    tree: &ModuleTree<A>,
    config: &ThuxConfig,
) -> Result<ComposedReducer<A>, ModuleError> {
    let composed = match tree {
        ModuleTree::Leaf(_) => {
            return Err(ModuleError::shape("", "root must be a namespace, found a module"));
        }
        ModuleTree::Branch(children) => compose_level(children, "", &config.wiring)?,
    };

    let shape = composed.shape();
    tracing::debug!(
        keys = shape.paths().len(),
        leaves = shape.leaf_count(),
        "composed reducer tree"
    );
    Ok(composed)
}

fn compose_level<A: Intent>(
    children: &BTreeMap<String, ModuleTree<A>>,
    prefix: &str,
    wiring: &WiringConfig,
) -> Result<ComposedReducer<A>, ModuleError> {
    if children.is_empty() && !wiring.allow_empty_branches {
        return Err(ModuleError::shape(prefix, "namespace has no modules"));
    }

    let mut slots = Vec::with_capacity(children.len());
    for (key, child) in children {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        if key.is_empty() {
            return Err(ModuleError::shape(&path, "empty namespace segment"));
        }
        if key.contains('.') {
            return Err(ModuleError::shape(&path, "namespace segment contains '.'"));
        }

        let slot = match child {
            ModuleTree::Leaf(module) => match module.reducer() {
                Some(reducer) => Slot::Module(reducer.clone()),
                None => Slot::NoOp,
            },
            ModuleTree::Branch(nested) => Slot::Nested(compose_level(nested, &path, wiring)?),
        };
        tracing::trace!(path = %path, slot = slot.kind(), "composed key");
        slots.push((key.clone(), slot));
    }

    Ok(ComposedReducer {
        slots: Arc::new(slots),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{create, ActionMap, CreatedModule, Draft, ModuleDef};
    use crate::mvi::FeatureState;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Count(u32);

    impl FeatureState for Count {}

    #[derive(Debug)]
    enum CountAction {
        Bump,
        Other,
    }

    impl Intent for CountAction {}

    fn counter() -> CreatedModule<CountAction> {
        create(ModuleDef::new(Count::default, ActionMap::new()).reducer(|draft: &mut Draft<Count>, action| {
            if let CountAction::Bump = action {
                draft.0 += 1;
            }
        }))
    }

    fn stateless() -> CreatedModule<CountAction> {
        create(ModuleDef::new(Count::default, ActionMap::new()))
    }

    #[test]
    fn unchanged_siblings_are_shared() {
        let tree = ModuleTree::branch([
            ("left", ModuleTree::branch([("count", ModuleTree::Leaf(counter()))])),
            ("right", ModuleTree::branch([("count", ModuleTree::Leaf(counter()))])),
        ]);
        let reducer = extract_reducers(&tree).unwrap();
        let prior = reducer.initial_state();

        let next = reducer.reduce(&prior, &CountAction::Other);
        assert!(next.ptr_eq(&prior));

        let bumped = reducer.reduce(&prior, &CountAction::Bump);
        assert!(!bumped.ptr_eq(&prior));
        assert_eq!(bumped.select::<Count>("left.count"), Some(&Count(1)));
    }

    #[test]
    fn stray_prior_keys_are_dropped() {
        let tree = ModuleTree::branch([("count", ModuleTree::Leaf(counter()))]);
        let reducer = extract_reducers(&tree).unwrap();
        let prior = StateNode::branch([
            ("count", StateNode::value(Count(3))),
            ("stale", StateNode::value(Count(9))),
        ]);

        let next = reducer.reduce(&prior, &CountAction::Other);
        assert_eq!(next.keys(), vec!["count"]);
        assert_eq!(next.select::<Count>("count"), Some(&Count(3)));
    }

    #[test]
    fn root_leaf_is_rejected() {
        let tree = ModuleTree::from(counter());
        let err = extract_reducers(&tree).unwrap_err();
        assert!(matches!(err, ModuleError::InvalidModuleShape { path, .. } if path == "<root>"));
    }

    #[test]
    fn empty_namespace_reports_path() {
        let tree = ModuleTree::branch([
            ("a", ModuleTree::Leaf(counter())),
            ("x", ModuleTree::branch([("y", ModuleTree::root())])),
        ]);
        let err = extract_reducers(&tree).unwrap_err();
        assert!(matches!(err, ModuleError::InvalidModuleShape { path, .. } if path == "x.y"));
    }

    #[test]
    fn empty_namespace_allowed_by_config() {
        let tree = ModuleTree::branch([("a", ModuleTree::Leaf(counter())), ("x", ModuleTree::root())]);
        let mut config = ThuxConfig::default();
        config.wiring.allow_empty_branches = true;

        let reducer = extract_reducers_with(&tree, &config).unwrap();
        let state = reducer.reduce(&StateNode::Absent, &CountAction::Other);
        assert!(state.get("x").is_some_and(StateNode::is_branch));
        assert!(state.at("x").unwrap().keys().is_empty());
    }

    #[test]
    fn value_under_namespace_is_replaced() {
        let tree = ModuleTree::branch([(
            "x",
            ModuleTree::branch([("count", ModuleTree::Leaf(counter()))]),
        )]);
        let reducer = extract_reducers(&tree).unwrap();
        let prior = StateNode::branch([("x", StateNode::value(Count(5)))]);

        let next = reducer.reduce(&prior, &CountAction::Bump);
        assert!(next.get("x").is_some_and(StateNode::is_branch));
        assert_eq!(next.select::<Count>("x.count"), Some(&Count(1)));
    }

    #[test]
    fn empty_key_is_rejected() {
        let tree = ModuleTree::branch([("", ModuleTree::Leaf(counter()))]);
        let err = extract_reducers(&tree).unwrap_err();
        assert_eq!(
            err,
            ModuleError::InvalidModuleShape {
                path: "<root>".to_string(),
                reason: "empty namespace segment".to_string(),
            }
        );
    }

    #[test]
    fn dotted_key_is_rejected() {
        let tree = ModuleTree::branch([("a.b", ModuleTree::Leaf(counter()))]);
        let err = extract_reducers(&tree).unwrap_err();
        assert!(matches!(err, ModuleError::InvalidModuleShape { reason, .. } if reason.contains("'.'")));
    }

    #[test]
    fn stateless_leaf_is_empty_slot() {
        let tree = ModuleTree::branch([("a", ModuleTree::Leaf(counter())), ("b", ModuleTree::Leaf(stateless()))]);
        let reducer = extract_reducers(&tree).unwrap();
        assert_eq!(format!("{:?}", reducer), r#"{"a": "module", "b": "no-op"}"#);
    }
}
