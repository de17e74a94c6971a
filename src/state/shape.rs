use std::collections::BTreeMap;

use super::node::StateNode;

/// Structure of a state tree without its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateShape {
    /// Key owned by a module reducer.
    Slice,
    /// Key with no reducer (or no state yet).
    Empty,
    /// Nested namespace.
    Branch(BTreeMap<String, StateShape>),
}

impl StateShape {
    /// Shape of an existing state tree.
    pub fn of(node: &StateNode) -> Self {
        match node {
            StateNode::Absent => StateShape::Empty,
            StateNode::Value(_) => StateShape::Slice,
            StateNode::Branch(children) => StateShape::Branch(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), StateShape::of(child)))
                    .collect(),
            ),
        }
    }

    /// Number of non-branch keys.
    pub fn leaf_count(&self) -> usize {
        match self {
            StateShape::Slice | StateShape::Empty => 1,
            StateShape::Branch(children) => children.values().map(StateShape::leaf_count).sum(),
        }
    }

    /// Dotted paths of every key, branches included, in order.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(self, "", &mut out);
        out
    }
}

fn collect_paths(shape: &StateShape, prefix: &str, out: &mut Vec<String>) {
    if let StateShape::Branch(children) = shape {
        for (key, child) in children {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            out.push(path.clone());
            collect_paths(child, &path, out);
        }
    }
}
