//! Module-level dependency edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edge::Edge;

/// Which closure of a module is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyType {
    /// Dependencies needed to build the module itself.
    Main,
    /// Dependencies of the module's unit tests.
    TestUnit,
}

impl DependencyType {
    pub const ALL: [DependencyType; 2] = [DependencyType::Main, DependencyType::TestUnit];
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyType::Main => f.write_str("MAIN"),
            DependencyType::TestUnit => f.write_str("TEST_UNIT"),
        }
    }
}

/// An attributed edge from one module to another.
///
/// `implementation_version` pins the exact implementation of the target;
/// `specification_version` asks for a minimum version instead. Nothing stops
/// both from being set; consumers treat the pin as taking precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub code_name_base: String,
    #[serde(default)]
    pub build_prerequisite: bool,
    #[serde(default)]
    pub compile_dependency: bool,
    #[serde(default)]
    pub runtime: bool,
    /// Pull the target's own closure into the depending module's closure.
    #[serde(default)]
    pub recursive: bool,
    /// The edge refers to the target's test artifact, not its main one.
    #[serde(default)]
    pub test: bool,
    #[serde(default)]
    pub implementation_version: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_version: Option<String>,
}

impl Dependency {
    /// A plain edge to `code_name_base` with every flag cleared.
    pub fn new(code_name_base: impl Into<String>) -> Self {
        Self {
            code_name_base: code_name_base.into(),
            build_prerequisite: false,
            compile_dependency: false,
            runtime: false,
            recursive: false,
            test: false,
            implementation_version: false,
            specification_version: None,
            release_version: None,
        }
    }

    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    pub fn test(mut self) -> Self {
        self.test = true;
        self
    }

    pub fn build_prerequisite(mut self) -> Self {
        self.build_prerequisite = true;
        self
    }

    pub fn compile_dependency(mut self) -> Self {
        self.compile_dependency = true;
        self
    }

    pub fn runtime(mut self) -> Self {
        self.runtime = true;
        self
    }

    pub fn implementation_version(mut self) -> Self {
        self.implementation_version = true;
        self
    }

    pub fn specification_version(mut self, version: impl Into<String>) -> Self {
        self.specification_version = Some(version.into());
        self
    }

    pub fn release_version(mut self, version: impl Into<String>) -> Self {
        self.release_version = Some(version.into());
        self
    }

    /// Closure of the target that a recursive edge pulls in.
    pub fn target_type(&self) -> DependencyType {
        if self.test {
            DependencyType::TestUnit
        } else {
            DependencyType::Main
        }
    }
}

impl Edge for Dependency {
    fn target(&self) -> &str {
        &self.code_name_base
    }
}

/// Renders the one-line summary used by dependency reports:
/// `cnb[/release][ = <impl>| > spec][ (t)][ (r)]`.
impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code_name_base)?;
        if let Some(release) = &self.release_version {
            write!(f, "/{release}")?;
        }
        if self.implementation_version {
            f.write_str(" = <impl>")?;
        } else if let Some(spec) = &self.specification_version {
            write!(f, " > {spec}")?;
        }
        if self.test {
            f.write_str(" (t)")?;
        }
        if self.recursive {
            f.write_str(" (r)")?;
        }
        Ok(())
    }
}
