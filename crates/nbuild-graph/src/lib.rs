//! # nbuild-graph
//!
//! Dependency closure resolution for a modular build.
//!
//! This crate holds the in-memory dependency graph of a module-based build
//! and answers the questions build task wiring needs: which modules a module
//! needs to compile and test, in which order clusters must be built, and
//! which dependencies feed annotation processing. It performs no I/O;
//! descriptor loaders populate it and classpath/manifest builders consume it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Registry                    │
//! │   (immutable after build, Arc-shared)       │
//! └───────────────┬─────────────────────────────┘
//!                 │
//!        ┌────────┴─────────┐
//!        ▼                  ▼
//!   ┌─────────┐        ┌─────────┐
//!   │ Cluster │        │ Module  │ ── closure cache
//!   └────┬────┘        └────┬────┘
//!        │                  │
//!        └────────┬─────────┘
//!                 ▼
//!        ┌──────────────────┐
//!        │ GraphNode<Edge>  │
//!        └──────────────────┘
//! ```
//!
//! - [`GraphNode`] owns a name and an insertion-ordered [`EdgeSet`] and
//!   computes cycle-checked transitive dependencies.
//! - [`Module`] embeds a node of [`Dependency`] edges for MAIN dependencies,
//!   keeps per-test-configuration edge sets, and caches closures.
//! - [`Cluster`] embeds a node whose edges are build-order prerequisites.
//! - [`RegistryBuilder`] is the only mutable form; [`Registry`] answers queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use nbuild_graph::{Dependency, DependencyType, Module, RegistryBuilder};
//!
//! # fn main() -> nbuild_graph::Result<()> {
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .register_cluster("platform", "nbbuild/platform")
//!     .assign_module("platform", "org.openide.util")
//!     .assign_module("platform", "org.openide.nodes")
//!     .add_module(Module::builder("org.openide.util").build()?)
//!     .add_module(
//!         Module::builder("org.openide.nodes")
//!             .main_dependency(Dependency::new("org.openide.util").recursive())
//!             .build()?,
//!     );
//! let registry = builder.build();
//!
//! let closure = registry.closure("org.openide.nodes", DependencyType::Main)?;
//! assert!(closure.contains("org.openide.util"));
//! # Ok(())
//! # }
//! ```

pub mod cluster;
pub mod dependency;
pub mod edge;
pub mod error;
pub mod module;
pub mod node;
pub mod options;
pub mod properties;
pub mod registry;
pub mod warning;

#[cfg(test)]
mod tests;

pub use cluster::{Cluster, ClusterDescriptor};
pub use dependency::{Dependency, DependencyType};
pub use edge::{Edge, EdgeSet};
pub use error::{ErrorKind, GraphError, Result};
pub use module::{Closure, Module, ModuleBuilder, ModuleDescriptor};
pub use node::{GraphNode, NodeLookup};
pub use options::ResolverOptions;
pub use properties::ExpandingProperties;
pub use registry::{DependencyPlan, Registry, RegistryBuilder};
pub use warning::ConstructionWarning;
