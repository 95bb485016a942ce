//! Clusters: named groups of modules with build-order edges between them.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::node::{GraphNode, NodeLookup};

/// A named group of modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    node: GraphNode<String>,
    location: PathBuf,
    modules: IndexSet<String>,
}

impl Cluster {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            node: GraphNode::new(name),
            location: location.into(),
            modules: IndexSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.node.name()
    }

    /// Directory hint the cluster was registered with.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Member modules in assignment order.
    pub fn modules(&self) -> &IndexSet<String> {
        &self.modules
    }

    /// The cluster-level graph node; its edges are build-order prerequisites.
    pub fn node(&self) -> &GraphNode<String> {
        &self.node
    }

    pub(crate) fn add_module(&mut self, module: impl Into<String>) -> bool {
        self.modules.insert(module.into())
    }

    pub(crate) fn add_dependency(&mut self, cluster: impl Into<String>) -> bool {
        self.node.add_edge(cluster.into())
    }
}

impl<S: std::hash::BuildHasher> NodeLookup<String> for IndexMap<String, Cluster, S> {
    fn node(&self, name: &str) -> Option<&GraphNode<String>> {
        self.get(name).map(Cluster::node)
    }
}

/// Format-agnostic cluster description handed over by cluster loaders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterDescriptor {
    pub name: String,
    pub location: PathBuf,
    pub modules: Vec<String>,
    pub depends_on: Vec<String>,
}

impl ClusterDescriptor {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn with_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules.extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn with_dependencies<I, S>(mut self, clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on.extend(clusters.into_iter().map(Into::into));
        self
    }
}
