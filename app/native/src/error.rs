//! Error types for Splitwall.
//!
//! Each subsystem owns its own error enum; this module folds them into the
//! single error type reported by the binary.

use thiserror::Error;

use crate::config::ConfigError;
use crate::wallpaper::{CycleError, DiscoveryError};

/// Errors that can stop the application.
#[derive(Debug, Error)]
pub enum SplitwallError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Monitor topology could not be discovered at startup.
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
    /// The rotation loop gave up.
    #[error("Wallpaper error: {0}")]
    Cycle(#[from] CycleError),
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
