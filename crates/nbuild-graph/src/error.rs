//! Error types for graph resolution.
//!
//! Fatal conditions surface as [`GraphError`]. Non-fatal construction problems
//! never become errors; they are recorded as
//! [`ConstructionWarning`](crate::ConstructionWarning) instead.

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A structural cycle in a generic node graph.
    Cycle,
    /// A module closure could not be completed.
    UnresolvedDependency,
    /// The queried identity is not owned by the registry.
    Unknown,
    /// Input handed to a builder was incomplete.
    Invalid,
}

/// Errors that can occur while resolving dependencies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A node was reached again while it was still being expanded.
    #[error("There is a loop in the dependency graph on: {node}")]
    CycleDetected {
        /// The node that closed the loop
        node: String,
    },

    /// A recursive dependency names a module the registry does not know.
    #[error("No module '{dependency}' as a dependency of: {required_by}")]
    UnresolvedDependency {
        /// The missing module
        dependency: String,
        /// The module whose closure was requested
        required_by: String,
    },

    /// Recursive module edges lead back to a closure that is still being computed.
    #[error("Module '{dependency}' required by '{required_by}' is part of a recursive dependency loop: {path}")]
    CircularModuleDependency {
        /// The module whose closure was re-entered
        dependency: String,
        /// The module holding the edge that closed the loop
        required_by: String,
        /// Human-readable resolution path, e.g. `a -> b -> a`
        path: String,
    },

    /// No module with this code name base is registered.
    #[error("Unknown module: {module}")]
    UnknownModule {
        /// The code name base that was queried
        module: String,
    },

    /// No cluster with this name is registered.
    #[error("Unknown cluster: {cluster}")]
    UnknownCluster {
        /// The cluster name that was queried
        cluster: String,
    },

    /// A builder was finished without a required field.
    #[error("Module descriptor is incomplete: missing {field}")]
    IncompleteModule {
        /// Name of the missing field
        field: &'static str,
    },
}

impl GraphError {
    /// Creates a cycle detected error for the given node.
    pub fn cycle(node: impl Into<String>) -> Self {
        Self::CycleDetected { node: node.into() }
    }

    /// Creates an unresolved dependency error.
    pub fn unresolved(dependency: impl Into<String>, required_by: impl Into<String>) -> Self {
        Self::UnresolvedDependency {
            dependency: dependency.into(),
            required_by: required_by.into(),
        }
    }

    /// Creates a circular module dependency error.
    pub fn circular_module(
        dependency: impl Into<String>,
        required_by: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::CircularModuleDependency {
            dependency: dependency.into(),
            required_by: required_by.into(),
            path: path.into(),
        }
    }

    /// Creates an unknown module error.
    pub fn unknown_module(module: impl Into<String>) -> Self {
        Self::UnknownModule {
            module: module.into(),
        }
    }

    /// Creates an unknown cluster error.
    pub fn unknown_cluster(cluster: impl Into<String>) -> Self {
        Self::UnknownCluster {
            cluster: cluster.into(),
        }
    }

    /// Returns the classification of this error.
    ///
    /// Module-level loops are reported as [`ErrorKind::UnresolvedDependency`]:
    /// the closure that hit them is just as incomplete as one with a missing target.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CycleDetected { .. } => ErrorKind::Cycle,
            Self::UnresolvedDependency { .. } | Self::CircularModuleDependency { .. } => {
                ErrorKind::UnresolvedDependency
            }
            Self::UnknownModule { .. } | Self::UnknownCluster { .. } => ErrorKind::Unknown,
            Self::IncompleteModule { .. } => ErrorKind::Invalid,
        }
    }
}
