//! Settings shared by every embedding application.

use nbuild_graph::ResolverOptions;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Top-level configuration: resolver options plus logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NbuildConfig {
    pub resolver: ResolverOptions,
    pub logging: LoggingSettings,
}

impl NbuildConfig {
    /// Reject values that would make the resolver misbehave silently.
    pub fn validate(&self) -> Result<()> {
        if self.resolver.unit_test_configuration.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "resolver.unit_test_configuration".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(processor) = self
            .resolver
            .annotation_processors
            .iter()
            .find(|p| p.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "resolver.annotation_processors".to_string(),
                message: format!("blank entry {processor:?}"),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Full,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives such as `"debug"` or `"nbuild_graph=trace"`.
    /// When unset, `RUST_LOG` is used.
    pub level: Option<String>,

    pub format: LogFormat,

    /// Emit ANSI colors.
    pub color: bool,

    /// Include the event target (module path) in each line.
    pub target: bool,
}
