//! # nbuild-config
//!
//! Configuration and logging setup for applications embedding `nbuild-graph`.
//!
//! Settings are layered with `figment`: built-in defaults, then an optional
//! `nbuild.toml`, then `NBUILD_*` environment variables.
//!
//! ```toml
//! [resolver]
//! unit_test_configuration = "unit"
//! annotation_processors = ["org.openide.util.lookup"]
//!
//! [logging]
//! level = "nbuild_graph=debug"
//! format = "compact"
//! ```

pub mod error;
pub mod loading;
pub mod logging;
pub mod settings;

pub use error::{ConfigError, Result};
pub use loading::{CONFIG_FILE, ENV_PREFIX};
pub use logging::{build_filter, init_logger};
pub use settings::{LogFormat, LoggingSettings, NbuildConfig};
