//! Layered configuration loading.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};

use crate::error::{ConfigError, Result};
use crate::settings::NbuildConfig;

/// Conventional config file name looked up by [`NbuildConfig::discover`].
pub const CONFIG_FILE: &str = "nbuild.toml";

/// Environment variable prefix. Nested keys are separated by `__`, e.g.
/// `NBUILD_RESOLVER__UNIT_TEST_CONFIGURATION=unit`.
pub const ENV_PREFIX: &str = "NBUILD_";

impl NbuildConfig {
    /// The provider stack used by [`load`](Self::load).
    /// Priority: environment variables > config file > defaults
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(NbuildConfig::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from defaults, an optional TOML file and the environment.
    ///
    /// # Errors
    ///
    /// Fails if `config_file` is given but does not exist, if a layer cannot
    /// be deserialized, or if the merged result does not [`validate`](Self::validate).
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file.filter(|p| !p.is_file()) {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let config: NbuildConfig = Self::figment(config_file).extract()?;
        config.validate()?;
        tracing::debug!(
            "Loaded configuration (file: {})",
            config_file.map_or_else(|| "none".to_string(), |p| p.display().to_string())
        );
        Ok(config)
    }

    /// Load configuration using `root/nbuild.toml` when it exists.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let candidate = root.as_ref().join(CONFIG_FILE);
        Self::load(candidate.is_file().then_some(candidate.as_path()))
    }

    /// [`discover`](Self::discover) from the current directory.
    pub fn discover_current() -> Result<Self> {
        let root: PathBuf = std::env::current_dir()?;
        Self::discover(root)
    }
}
