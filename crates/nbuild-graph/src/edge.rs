//! Directed edges and insertion-ordered edge sets.

use indexmap::IndexMap;
use indexmap::map::Values;
use serde::{Serialize, Serializer};

/// A directed relation to another node, identified by the target's name.
///
/// Two edges with the same target are the same edge as far as an
/// [`EdgeSet`] is concerned, whatever their other attributes.
pub trait Edge: Clone {
    /// Identity of the node this edge points at.
    fn target(&self) -> &str;
}

impl Edge for String {
    fn target(&self) -> &str {
        self
    }
}

/// Ordered set of outgoing edges, deduplicated by target.
///
/// The first edge inserted for a target is kept; later inserts of the same
/// target are ignored. Equality compares edges in order.
#[derive(Debug, Clone)]
pub struct EdgeSet<E> {
    edges: IndexMap<String, E>,
}

impl<E: PartialEq> PartialEq for EdgeSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.edges.iter().eq(other.edges.iter())
    }
}

impl<E: Eq> Eq for EdgeSet<E> {}

impl<E> Default for EdgeSet<E> {
    fn default() -> Self {
        Self {
            edges: IndexMap::new(),
        }
    }
}

impl<E: Edge> EdgeSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `edge` unless its target is already present.
    ///
    /// Returns `true` if the edge was added.
    pub fn insert(&mut self, edge: E) -> bool {
        if self.edges.contains_key(edge.target()) {
            return false;
        }
        self.edges.insert(edge.target().to_string(), edge);
        true
    }

    pub fn contains(&self, target: &str) -> bool {
        self.edges.contains_key(target)
    }

    pub fn get(&self, target: &str) -> Option<&E> {
        self.edges.get(target)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in insertion order.
    pub fn iter(&self) -> Values<'_, String, E> {
        self.edges.values()
    }

    /// Target names in insertion order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }
}

impl<E: Edge> Extend<E> for EdgeSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl<E: Edge> FromIterator<E> for EdgeSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, E> IntoIterator for &'a EdgeSet<E> {
    type Item = &'a E;
    type IntoIter = Values<'a, String, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.values()
    }
}

impl<E: Serialize> Serialize for EdgeSet<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.edges.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_targets_are_ignored() {
        let mut set = EdgeSet::new();
        assert!(set.insert("b".to_string()));
        assert!(set.insert("a".to_string()));
        assert!(!set.insert("b".to_string()));

        assert_eq!(set.len(), 2);
        assert_eq!(set.targets().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn equality_respects_order() {
        let forward: EdgeSet<String> = ["x", "y"].into_iter().map(String::from).collect();
        let reversed: EdgeSet<String> = ["y", "x"].into_iter().map(String::from).collect();
        let again: EdgeSet<String> = ["x", "y"].into_iter().map(String::from).collect();

        assert_ne!(forward, reversed);
        assert_eq!(forward, again);
    }

    #[test]
    fn serializes_as_sequence() {
        let set: EdgeSet<String> = ["x", "y"].into_iter().map(String::from).collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
    }
}
