//! Build modules and their builder.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::dependency::{Dependency, DependencyType};
use crate::edge::EdgeSet;
use crate::error::{GraphError, Result};
use crate::node::GraphNode;

/// Fully expanded dependency set of one module for one [`DependencyType`].
pub type Closure = EdgeSet<Dependency>;

/// A build unit identified by its code name base.
///
/// Modules are immutable once built. The only interior state is the closure
/// cache, which is filled lazily by [`Registry::closure`](crate::Registry::closure)
/// and never changes an entry's contents once written.
#[derive(Debug, Serialize)]
pub struct Module {
    node: GraphNode<Dependency>,
    test_dependencies: IndexMap<String, EdgeSet<Dependency>>,
    /// Runtime-relative path -> binary origin inside the source tree
    class_path_extensions: IndexMap<String, Option<String>>,
    public_packages: Vec<String>,
    friend_packages: Vec<String>,
    friend_modules: Vec<String>,
    #[serde(skip)]
    closures: RwLock<HashMap<DependencyType, Arc<Closure>>>,
}

impl Module {
    /// Start building a module with the given code name base.
    pub fn builder(code_name_base: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder {
            module: Module {
                node: GraphNode::new(code_name_base),
                test_dependencies: IndexMap::new(),
                class_path_extensions: IndexMap::new(),
                public_packages: Vec::new(),
                friend_packages: Vec::new(),
                friend_modules: Vec::new(),
                closures: RwLock::new(HashMap::default()),
            },
        }
    }

    pub fn code_name_base(&self) -> &str {
        self.node.name()
    }

    /// The graph node holding this module's MAIN edges.
    pub fn node(&self) -> &GraphNode<Dependency> {
        &self.node
    }

    pub fn main_dependencies(&self) -> &EdgeSet<Dependency> {
        self.node.direct_dependencies()
    }

    /// Direct edges filed under a test configuration such as `"unit"`.
    pub fn test_dependencies(&self, configuration: &str) -> Option<&EdgeSet<Dependency>> {
        self.test_dependencies.get(configuration)
    }

    /// Names of every test configuration this module declares.
    pub fn test_configurations(&self) -> impl Iterator<Item = &str> {
        self.test_dependencies.keys().map(String::as_str)
    }

    /// Direct edges for `ty`; `TestUnit` reads the `unit_configuration` edge set.
    pub fn direct_dependencies(
        &self,
        ty: DependencyType,
        unit_configuration: &str,
    ) -> Option<&EdgeSet<Dependency>> {
        match ty {
            DependencyType::Main => Some(self.main_dependencies()),
            DependencyType::TestUnit => self.test_dependencies(unit_configuration),
        }
    }

    pub fn class_path_extensions(&self) -> &IndexMap<String, Option<String>> {
        &self.class_path_extensions
    }

    pub fn public_packages(&self) -> &[String] {
        &self.public_packages
    }

    pub fn friend_packages(&self) -> &[String] {
        &self.friend_packages
    }

    pub fn friend_modules(&self) -> &[String] {
        &self.friend_modules
    }

    pub(crate) fn cached_closure(&self, ty: DependencyType) -> Option<Arc<Closure>> {
        self.closures.read().get(&ty).cloned()
    }

    /// Concurrent writers may race here; the last one wins and both computed
    /// the same set.
    pub(crate) fn store_closure(&self, ty: DependencyType, closure: Closure) -> Arc<Closure> {
        let closure = Arc::new(closure);
        self.closures.write().insert(ty, Arc::clone(&closure));
        closure
    }
}

/// Accumulates module fields before yielding an immutable [`Module`].
pub struct ModuleBuilder {
    module: Module,
}

impl ModuleBuilder {
    pub fn main_dependency(mut self, dependency: Dependency) -> Self {
        self.module.node.add_edge(dependency);
        self
    }

    pub fn main_dependencies(mut self, dependencies: impl IntoIterator<Item = Dependency>) -> Self {
        for dependency in dependencies {
            self.module.node.add_edge(dependency);
        }
        self
    }

    pub fn test_dependency(mut self, configuration: impl Into<String>, dependency: Dependency) -> Self {
        self.module
            .test_dependencies
            .entry(configuration.into())
            .or_default()
            .insert(dependency);
        self
    }

    pub fn test_dependencies(
        mut self,
        configuration: impl Into<String>,
        dependencies: impl IntoIterator<Item = Dependency>,
    ) -> Self {
        self.module
            .test_dependencies
            .entry(configuration.into())
            .or_default()
            .extend(dependencies);
        self
    }

    pub fn class_path_extension(
        mut self,
        runtime_path: impl Into<String>,
        binary_origin: Option<String>,
    ) -> Self {
        self.module
            .class_path_extensions
            .insert(runtime_path.into(), binary_origin);
        self
    }

    pub fn public_package(mut self, package: impl Into<String>) -> Self {
        self.module.public_packages.push(package.into());
        self
    }

    pub fn friend_package(mut self, package: impl Into<String>) -> Self {
        self.module.friend_packages.push(package.into());
        self
    }

    pub fn friend_module(mut self, module: impl Into<String>) -> Self {
        self.module.friend_modules.push(module.into());
        self
    }

    /// Finish the module.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::IncompleteModule`] when the code name base is blank.
    pub fn build(self) -> Result<Module> {
        if self.module.code_name_base().trim().is_empty() {
            return Err(GraphError::IncompleteModule {
                field: "code_name_base",
            });
        }
        Ok(self.module)
    }
}

/// Format-agnostic module description handed over by descriptor loaders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleDescriptor {
    pub code_name_base: String,
    pub main_dependencies: Vec<Dependency>,
    pub test_dependencies: IndexMap<String, Vec<Dependency>>,
    pub class_path_extensions: IndexMap<String, Option<String>>,
    pub public_packages: Vec<String>,
    pub friend_packages: Vec<String>,
    pub friend_modules: Vec<String>,
}

impl TryFrom<ModuleDescriptor> for Module {
    type Error = GraphError;

    fn try_from(descriptor: ModuleDescriptor) -> Result<Self> {
        let mut builder =
            Module::builder(descriptor.code_name_base).main_dependencies(descriptor.main_dependencies);

        for (configuration, dependencies) in descriptor.test_dependencies {
            builder = builder.test_dependencies(configuration, dependencies);
        }
        for (path, origin) in descriptor.class_path_extensions {
            builder = builder.class_path_extension(path, origin);
        }
        for package in descriptor.public_packages {
            builder = builder.public_package(package);
        }
        for package in descriptor.friend_packages {
            builder = builder.friend_package(package);
        }
        for module in descriptor.friend_modules {
            builder = builder.friend_module(module);
        }

        builder.build()
    }
}
