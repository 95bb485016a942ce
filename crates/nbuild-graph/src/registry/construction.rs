//! Construction of a registry.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cluster::{Cluster, ClusterDescriptor};
use crate::error::Result;
use crate::module::{Module, ModuleDescriptor};
use crate::options::ResolverOptions;
use crate::warning::ConstructionWarning;

use super::{Registry, RegistryInner};

/// Mutable registry under construction.
///
/// All registration happens here; nothing can be queried until
/// [`build`](Self::build) hands out the finished [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    inner: RegistryInner,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from loader output.
    ///
    /// Clusters, their members and all modules are registered first; cluster
    /// dependencies are declared in a second pass so a cluster may depend on
    /// one that appears later in `clusters`.
    ///
    /// # Errors
    ///
    /// Fails if a module descriptor is incomplete.
    pub fn from_descriptors<C, M>(clusters: C, modules: M) -> Result<Self>
    where
        C: IntoIterator<Item = ClusterDescriptor>,
        M: IntoIterator<Item = ModuleDescriptor>,
    {
        let mut builder = Self::new();
        builder.add_descriptors(clusters, modules)?;
        Ok(builder)
    }

    /// Register descriptors into an existing builder. See [`from_descriptors`](Self::from_descriptors).
    pub fn add_descriptors<C, M>(&mut self, clusters: C, modules: M) -> Result<&mut Self>
    where
        C: IntoIterator<Item = ClusterDescriptor>,
        M: IntoIterator<Item = ModuleDescriptor>,
    {
        let mut pending_dependencies = Vec::new();

        // First pass: clusters and membership
        for descriptor in clusters {
            self.register_cluster(descriptor.name.as_str(), descriptor.location);
            for module in descriptor.modules {
                self.assign_module(&descriptor.name, module);
            }
            pending_dependencies.push((descriptor.name, descriptor.depends_on));
        }

        for descriptor in modules {
            self.add_module(Module::try_from(descriptor)?);
        }

        // Second pass: cluster edges, now that every cluster exists
        for (cluster, depends_on) in pending_dependencies {
            for target in depends_on {
                self.declare_cluster_dependency(&cluster, &target);
            }
        }

        Ok(self)
    }

    /// Replace the resolver options.
    pub fn options(&mut self, options: ResolverOptions) -> &mut Self {
        self.inner.options = options;
        self
    }

    /// Register a cluster. Does nothing if a cluster with this name exists.
    pub fn register_cluster(
        &mut self,
        name: impl Into<String>,
        location: impl Into<PathBuf>,
    ) -> &mut Self {
        let name = name.into();
        if !self.inner.clusters.contains_key(&name) {
            tracing::debug!("Registering cluster {}", name);
            let cluster = Cluster::new(name.clone(), location);
            self.inner.clusters.insert(name, cluster);
        }
        self
    }

    /// Record `module` as a member of `cluster`.
    ///
    /// An unregistered cluster is reported as a warning and the membership is dropped.
    pub fn assign_module(&mut self, cluster: &str, module: impl Into<String>) -> &mut Self {
        let module = module.into();
        match self.inner.clusters.get_mut(cluster) {
            Some(entry) => {
                entry.add_module(module);
            }
            None => self.warn(ConstructionWarning::UnassignedModule {
                cluster: cluster.to_string(),
                module,
            }),
        }
        self
    }

    /// Add a build-order edge from `cluster` to `dependency`.
    ///
    /// Both clusters must already be registered. Otherwise the edge is
    /// dropped and a warning is recorded; construction continues.
    pub fn declare_cluster_dependency(&mut self, cluster: &str, dependency: &str) -> &mut Self {
        if !self.inner.clusters.contains_key(dependency) {
            self.warn(ConstructionWarning::UnresolvedCluster {
                cluster: cluster.to_string(),
                dependency: dependency.to_string(),
            });
            return self;
        }

        match self.inner.clusters.get_mut(cluster) {
            Some(entry) => {
                entry.add_dependency(dependency);
            }
            None => self.warn(ConstructionWarning::UnknownCluster {
                cluster: cluster.to_string(),
            }),
        }
        self
    }

    /// Add a module. A module with the same code name base is replaced.
    pub fn add_module(&mut self, module: Module) -> &mut Self {
        let name = module.code_name_base().to_string();
        if self.inner.modules.insert(name.clone(), module).is_some() {
            self.warn(ConstructionWarning::DuplicateModule { module: name });
        }
        self
    }

    /// Define a named, ordered selection of clusters.
    ///
    /// Unregistered cluster names are dropped with a warning. Redefining a
    /// configuration replaces it.
    pub fn define_cluster_config<I, S>(&mut self, name: &str, clusters: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected = Vec::new();
        for cluster in clusters {
            let cluster = cluster.into();
            if !self.inner.clusters.contains_key(&cluster) {
                self.warn(ConstructionWarning::UnresolvedConfigCluster {
                    config: name.to_string(),
                    cluster,
                });
            } else if !selected.contains(&cluster) {
                selected.push(cluster);
            }
        }
        self.inner.cluster_configs.insert(name.to_string(), selected);
        self
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[ConstructionWarning] {
        &self.inner.warnings
    }

    /// Finish construction.
    pub fn build(self) -> Registry {
        tracing::debug!(
            "Registry built: {} clusters, {} modules, {} warnings",
            self.inner.clusters.len(),
            self.inner.modules.len(),
            self.inner.warnings.len()
        );
        Registry {
            inner: Arc::new(self.inner),
        }
    }

    fn warn(&mut self, warning: ConstructionWarning) {
        tracing::warn!("{}", warning);
        self.inner.warnings.push(warning);
    }
}
