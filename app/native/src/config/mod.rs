//! Configuration module for Splitwall.
//!
//! Without a configuration file the application runs on compiled-in
//! defaults. A JSONC file can be supplied with `--config` to override any of
//! them.

pub mod path;
mod types;

use std::path::Path;

pub use types::{ConfigError, ResizeMode, SplitwallConfig, load_config_from_path};

/// Loads the configuration for this run.
///
/// `None` yields [`SplitwallConfig::default`].
///
/// # Errors
///
/// Propagates any error from [`load_config_from_path`].
pub fn load(path: Option<&Path>) -> Result<SplitwallConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(SplitwallConfig::default());
    };

    let config = load_config_from_path(path)?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}
