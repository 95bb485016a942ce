//! Generic directed graph node with cycle-checked transitive closure.
//!
//! [`GraphNode`] is embedded by both [`Cluster`](crate::Cluster) and
//! [`Module`](crate::Module); it owns the node's identity and its outgoing
//! edges, while the surrounding container answers name lookups through
//! [`NodeLookup`].

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;

use crate::edge::{Edge, EdgeSet};
use crate::error::{GraphError, Result};

/// Resolves node names to nodes during traversal.
pub trait NodeLookup<E> {
    fn node(&self, name: &str) -> Option<&GraphNode<E>>;
}

impl<E, S: std::hash::BuildHasher> NodeLookup<E> for IndexMap<String, GraphNode<E>, S> {
    fn node(&self, name: &str) -> Option<&GraphNode<E>> {
        self.get(name)
    }
}

/// A named node and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode<E = String> {
    name: String,
    edges: EdgeSet<E>,
}

impl<E: Edge> GraphNode<E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edges: EdgeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an outgoing edge. Returns `false` if the target was already present.
    pub fn add_edge(&mut self, edge: E) -> bool {
        self.edges.insert(edge)
    }

    /// Outgoing edges in insertion order.
    pub fn direct_dependencies(&self) -> &EdgeSet<E> {
        &self.edges
    }

    /// Every node reachable through one or more edges, excluding this node.
    ///
    /// The result is in post-order: a node appears after everything it
    /// depends on. Targets that `lookup` does not know are treated as leaves.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CycleDetected`] naming the first node reached
    /// again while it is still being expanded.
    pub fn transitive_dependencies<L>(&self, lookup: &L) -> Result<IndexSet<String>>
    where
        L: NodeLookup<E> + ?Sized,
    {
        let mut resolved: IndexSet<String> = IndexSet::new();
        // Nodes whose edges have been pushed but which are not resolved yet.
        // These are exactly the ancestors of the stack top.
        let mut expanding: HashSet<&str> = HashSet::default();
        let mut stack: Vec<&str> = vec![self.name.as_str()];

        while let Some(&top) = stack.last() {
            if resolved.contains(top) {
                stack.pop();
                continue;
            }

            let node = if stack.len() == 1 {
                Some(self)
            } else {
                lookup.node(top)
            };

            let Some(node) = node else {
                resolved.insert(top.to_string());
                stack.pop();
                continue;
            };

            expanding.insert(top);
            let mut pushed = false;
            for target in node.edges.targets() {
                if resolved.contains(target) {
                    continue;
                }
                if expanding.contains(target) {
                    return Err(GraphError::cycle(target));
                }
                stack.push(target);
                pushed = true;
            }

            if !pushed {
                expanding.remove(top);
                stack.pop();
                if !stack.is_empty() {
                    resolved.insert(top.to_string());
                }
            }
        }

        Ok(resolved)
    }
}
