//! Resolver options.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Modules whose presence on a classpath always implies annotation processing.
pub const DEFAULT_ANNOTATION_PROCESSORS: &[&str] = &[
    "org.openide.util.lookup",
    "org.openide.util",
    "org.openide.modules",
    "org.netbeans.modules.editor.mimelookup",
    "org.openide.filesystems",
    "net.java.html.boot",
    "net.java.html.sound",
    "net.java.html.geo",
    "net.java.html.json",
];

/// Test configuration read for [`DependencyType::TestUnit`](crate::DependencyType::TestUnit).
pub const DEFAULT_UNIT_TEST_CONFIGURATION: &str = "unit";

/// Options that shape closure resolution and dependency plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Code name bases that are routed to annotation processor paths.
    pub annotation_processors: IndexSet<String>,
    /// Test configuration name consumed by `TestUnit` queries.
    pub unit_test_configuration: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            annotation_processors: DEFAULT_ANNOTATION_PROCESSORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            unit_test_configuration: DEFAULT_UNIT_TEST_CONFIGURATION.to_string(),
        }
    }
}

impl ResolverOptions {
    pub fn is_annotation_processor(&self, code_name_base: &str) -> bool {
        self.annotation_processors.contains(code_name_base)
    }
}
