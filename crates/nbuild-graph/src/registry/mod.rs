//! The registry owning every cluster and module.
//!
//! A [`RegistryBuilder`] is populated by a single loader. [`RegistryBuilder::build`]
//! consumes it and returns an immutable [`Registry`], which is cheap to clone
//! and safe to query from many threads. Queries are split across submodules
//! the same way the impl blocks are: lookups, closure resolution, cluster
//! traversal, reports and dependency plans.

mod closure;
mod construction;
mod inspect;
mod plan;
mod queries;
mod traversal;

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::cluster::Cluster;
use crate::module::Module;
use crate::options::ResolverOptions;
use crate::warning::ConstructionWarning;

pub use construction::RegistryBuilder;
pub use plan::DependencyPlan;

/// Immutable, shareable view over a fully constructed dependency graph.
#[derive(Debug, Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct RegistryInner {
    pub(crate) clusters: IndexMap<String, Cluster>,
    pub(crate) modules: IndexMap<String, Module>,
    pub(crate) cluster_configs: IndexMap<String, Vec<String>>,
    pub(crate) warnings: Vec<ConstructionWarning>,
    pub(crate) options: ResolverOptions,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }
}

/// Serializes clusters, modules, cluster configs, warnings and options.
/// Closure caches are not included.
impl Serialize for Registry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
