//! Non-fatal problems found while a registry is assembled.

use std::fmt;

use serde::Serialize;

/// A construction problem that left the registry usable but incomplete.
///
/// Each warning is logged when it occurs and kept on the finished
/// [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstructionWarning {
    /// A cluster dependency named a cluster that is not registered; the edge was dropped.
    UnresolvedCluster { cluster: String, dependency: String },
    /// An operation referred to a cluster that was never registered.
    UnknownCluster { cluster: String },
    /// A module was assigned to a cluster that is not registered.
    UnassignedModule { cluster: String, module: String },
    /// A module with the same code name base was added twice; the later one replaced the earlier.
    DuplicateModule { module: String },
    /// A cluster configuration listed a cluster that is not registered.
    UnresolvedConfigCluster { config: String, cluster: String },
}

impl fmt::Display for ConstructionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedCluster {
                cluster,
                dependency,
            } => write!(
                f,
                "Missing cluster definition: {dependency} (required by cluster {cluster})"
            ),
            Self::UnknownCluster { cluster } => write!(f, "Missing cluster definition: {cluster}"),
            Self::UnassignedModule { cluster, module } => write!(
                f,
                "Module {module} assigned to missing cluster definition: {cluster}"
            ),
            Self::DuplicateModule { module } => {
                write!(f, "Module {module} registered more than once")
            }
            Self::UnresolvedConfigCluster { config, cluster } => write!(
                f,
                "Missing cluster definition: {cluster} (listed in cluster config {config})"
            ),
        }
    }
}
