//! Lookup queries on a registry.

use indexmap::IndexSet;

use crate::cluster::Cluster;
use crate::edge::EdgeSet;
use crate::error::{GraphError, Result};
use crate::module::Module;
use crate::options::ResolverOptions;
use crate::warning::ConstructionWarning;

use super::Registry;

impl Registry {
    /// Find a module by code name base anywhere in the registry.
    pub fn resolve_module(&self, code_name_base: &str) -> Option<&Module> {
        self.inner.modules.get(code_name_base)
    }

    /// Like [`resolve_module`](Self::resolve_module), but an unknown module is an error.
    pub fn module(&self, code_name_base: &str) -> Result<&Module> {
        self.resolve_module(code_name_base)
            .ok_or_else(|| GraphError::unknown_module(code_name_base))
    }

    pub fn cluster(&self, name: &str) -> Option<&Cluster> {
        self.inner.clusters.get(name)
    }

    /// Member modules of a cluster in assignment order.
    pub fn modules_of(&self, cluster: &str) -> Result<&IndexSet<String>> {
        self.require_cluster(cluster).map(Cluster::modules)
    }

    /// Clusters that must be built before `cluster`.
    pub fn cluster_dependencies(&self, cluster: &str) -> Result<&EdgeSet<String>> {
        self.require_cluster(cluster)
            .map(|c| c.node().direct_dependencies())
    }

    /// Name of the first cluster that lists `code_name_base` as a member.
    pub fn cluster_of(&self, code_name_base: &str) -> Option<&str> {
        self.inner
            .clusters
            .values()
            .find(|c| c.modules().contains(code_name_base))
            .map(Cluster::name)
    }

    /// Clusters selected by a named cluster configuration.
    pub fn cluster_config(&self, name: &str) -> Option<&[String]> {
        self.inner.cluster_configs.get(name).map(Vec::as_slice)
    }

    /// All clusters in registration order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.inner.clusters.values()
    }

    /// All modules in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.inner.modules.values()
    }

    pub fn warnings(&self) -> &[ConstructionWarning] {
        &self.inner.warnings
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.inner.options
    }

    pub(crate) fn require_cluster(&self, name: &str) -> Result<&Cluster> {
        self.cluster(name)
            .ok_or_else(|| GraphError::unknown_cluster(name))
    }
}
