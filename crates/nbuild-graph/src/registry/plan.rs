//! Classpath-oriented view of a module's closures.

use serde::Serialize;

use crate::dependency::{Dependency, DependencyType};
use crate::edge::{Edge, EdgeSet};
use crate::error::Result;

use super::Registry;

/// Dependencies of one module sorted into the buckets a classpath builder fills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyPlan {
    /// Every edge of the MAIN closure.
    pub implementation: EdgeSet<Dependency>,
    /// MAIN edges that are build prerequisites or known annotation processors.
    pub annotation_processors: EdgeSet<Dependency>,
    /// Every edge of the `TestUnit` closure.
    pub test_implementation: EdgeSet<Dependency>,
    /// `TestUnit` edges that refer to another module's test artifact.
    pub test_artifacts: EdgeSet<Dependency>,
    pub test_annotation_processors: EdgeSet<Dependency>,
}

impl Registry {
    /// Sort the MAIN and `TestUnit` closures of `module` into a [`DependencyPlan`].
    ///
    /// Annotation processors of the main sources are also available to the tests.
    pub fn dependency_plan(&self, module: &str) -> Result<DependencyPlan> {
        let options = self.options();
        let mut plan = DependencyPlan::default();

        for dependency in self.closure(module, DependencyType::Main)?.iter() {
            plan.implementation.insert(dependency.clone());
            if dependency.build_prerequisite || options.is_annotation_processor(dependency.target()) {
                plan.annotation_processors.insert(dependency.clone());
                plan.test_annotation_processors.insert(dependency.clone());
            }
        }

        for dependency in self.closure(module, DependencyType::TestUnit)?.iter() {
            plan.test_implementation.insert(dependency.clone());
            if dependency.test {
                plan.test_artifacts.insert(dependency.clone());
            }
            if options.is_annotation_processor(dependency.target()) {
                plan.test_annotation_processors.insert(dependency.clone());
            }
        }

        Ok(plan)
    }
}
