//! Nested arrangement of created modules.

use std::collections::BTreeMap;

use crate::error::ModuleError;
use crate::module::action::ActionMap;
use crate::module::create::CreatedModule;
use crate::mvi::Intent;

/// A node of the module tree: a created module or a namespace of nodes.
///
/// The namespace structure becomes the shape of the composed state.
pub enum ModuleTree<A> {
    Leaf(CreatedModule<A>),
    Branch(BTreeMap<String, ModuleTree<A>>),
}

impl<A: Intent> ModuleTree<A> {
    /// Namespace from `(segment, node)` pairs.
    pub fn branch<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ModuleTree<A>)>,
    {
        ModuleTree::Branch(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Namespace with no entries yet, to be filled with [`ModuleTree::insert`].
    pub fn root() -> Self {
        ModuleTree::Branch(BTreeMap::new())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ModuleTree::Leaf(_))
    }

    /// Places `module` at a dotted path, creating intermediate namespaces.
    pub fn insert(&mut self, path: &str, module: CreatedModule<A>) -> Result<(), ModuleError> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(ModuleError::shape(path, "empty namespace segment"));
        }

        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(ModuleError::shape(path, "empty path")),
        };

        let mut node = self;
        for (depth, segment) in parents.iter().enumerate() {
            node = match node {
                ModuleTree::Branch(children) => children
                    .entry(segment.to_string())
                    .or_insert_with(ModuleTree::root),
                ModuleTree::Leaf(_) => {
                    return Err(ModuleError::shape(
                        &segments[..depth].join("."),
                        format!("cannot nest '{}' under a module", path),
                    ));
                }
            };
        }

        match node {
            ModuleTree::Branch(children) if children.contains_key(*last) => {
                Err(ModuleError::shape(path, "key already occupied"))
            }
            ModuleTree::Branch(children) => {
                children.insert(last.to_string(), ModuleTree::Leaf(module));
                Ok(())
            }
            ModuleTree::Leaf(_) => Err(ModuleError::shape(
                &parents.join("."),
                format!("cannot nest '{}' under a module", path),
            )),
        }
    }

    /// Node at a dotted path; the empty path is the node itself.
    pub fn get(&self, path: &str) -> Option<&ModuleTree<A>> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |node, segment| match node {
            ModuleTree::Branch(children) => children.get(segment),
            ModuleTree::Leaf(_) => None,
        })
    }

    pub fn module(&self, path: &str) -> Option<&CreatedModule<A>> {
        match self.get(path)? {
            ModuleTree::Leaf(module) => Some(module),
            ModuleTree::Branch(_) => None,
        }
    }

    /// Action map of the module at `path`.
    pub fn actions(&self, path: &str) -> Option<&ActionMap<A>> {
        self.module(path).map(CreatedModule::actions)
    }

    /// Dotted paths of every module, in key order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_leaf_paths("", &mut out);
        out
    }

    fn collect_leaf_paths(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            ModuleTree::Leaf(_) => out.push(prefix.to_string()),
            ModuleTree::Branch(children) => {
                for (key, child) in children {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    child.collect_leaf_paths(&path, out);
                }
            }
        }
    }
}

impl<A> From<CreatedModule<A>> for ModuleTree<A> {
    fn from(module: CreatedModule<A>) -> Self {
        ModuleTree::Leaf(module)
    }
}
