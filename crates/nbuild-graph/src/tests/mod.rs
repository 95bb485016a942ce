mod closure_tests;

use crate::{Dependency, Module, Registry, RegistryBuilder};

/// Registry holding `modules` and no clusters.
pub(crate) fn registry_of(modules: Vec<Module>) -> Registry {
    let mut builder = RegistryBuilder::new();
    for module in modules {
        builder.add_module(module);
    }
    builder.build()
}

/// Module with the given MAIN edges.
pub(crate) fn module(name: &str, main: Vec<Dependency>) -> Module {
    Module::builder(name)
        .main_dependencies(main)
        .build()
        .unwrap()
}
