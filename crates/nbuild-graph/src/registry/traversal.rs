//! Cluster-level traversal.

use indexmap::IndexSet;

use crate::error::Result;

use super::Registry;

impl Registry {
    /// Every cluster `cluster` depends on, directly or indirectly.
    ///
    /// Prerequisites come before the clusters that need them.
    ///
    /// # Errors
    ///
    /// Fails with [`UnknownCluster`](crate::GraphError::UnknownCluster) or,
    /// if the cluster edges form a loop, [`CycleDetected`](crate::GraphError::CycleDetected).
    pub fn transitive_cluster_dependencies(&self, cluster: &str) -> Result<IndexSet<String>> {
        self.require_cluster(cluster)?
            .node()
            .transitive_dependencies(&self.inner.clusters)
    }

    /// All clusters ordered so each comes after every cluster it depends on.
    ///
    /// Among independent clusters the registration order is kept.
    pub fn cluster_build_order(&self) -> Result<Vec<String>> {
        let mut order: IndexSet<String> = IndexSet::with_capacity(self.inner.clusters.len());

        for cluster in self.inner.clusters.values() {
            if order.contains(cluster.name()) {
                continue;
            }
            let prerequisites = cluster.node().transitive_dependencies(&self.inner.clusters)?;
            order.extend(prerequisites);
            order.insert(cluster.name().to_string());
        }

        Ok(order.into_iter().collect())
    }
}
