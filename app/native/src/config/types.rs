//! Configuration types for Splitwall.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Every field is optional; missing fields fall back to the compiled-in
//! defaults in [`crate::constants`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::path::expand_and_resolve;
use crate::constants;
use crate::geometry::Orientation;

/// How a source image is fitted to a monitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Resize to the exact monitor size, ignoring aspect ratio.
    #[default]
    Stretch,
    /// Scale preserving aspect ratio until the monitor is covered, then
    /// center-crop the overflow.
    Cover,
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitwallConfig {
    /// Directory holding landscape candidates.
    /// Relative paths resolve against the working directory; `~` is expanded.
    pub landscape_dir: String,

    /// Directory holding portrait candidates.
    pub portrait_dir: String,

    /// File the composed wallpaper is written to before being applied.
    pub output: String,

    /// Delay between two wallpaper changes, in milliseconds.
    pub interval_ms: u64,

    /// Number of consecutive failed cycles tolerated before giving up.
    pub max_consecutive_failures: u32,

    /// How source images are fitted to each monitor.
    pub resize: ResizeMode,

    /// JPEG quality of the composed wallpaper (1-100).
    pub jpeg_quality: u8,
}

impl Default for SplitwallConfig {
    fn default() -> Self {
        Self {
            landscape_dir: constants::LANDSCAPE_DIR.to_string(),
            portrait_dir: constants::PORTRAIT_DIR.to_string(),
            output: constants::OUTPUT_FILE.to_string(),
            interval_ms: constants::CYCLE_INTERVAL_MS,
            max_consecutive_failures: constants::MAX_CONSECUTIVE_FAILURES,
            resize: ResizeMode::default(),
            jpeg_quality: constants::JPEG_QUALITY,
        }
    }
}

impl SplitwallConfig {
    /// Candidate directory for an orientation, resolved against `base_dir`.
    #[must_use]
    pub fn directory_for(&self, orientation: Orientation, base_dir: &Path) -> PathBuf {
        let dir = match orientation {
            Orientation::Landscape => &self.landscape_dir,
            Orientation::Portrait => &self.portrait_dir,
        };
        expand_and_resolve(dir, base_dir)
    }

    /// Output file, resolved against `base_dir`.
    #[must_use]
    pub fn output_path(&self, base_dir: &Path) -> PathBuf { expand_and_resolve(&self.output, base_dir) }

    /// Delay between cycles.
    #[must_use]
    pub const fn interval(&self) -> Duration { Duration::from_millis(self.interval_ms) }

    /// Checks values serde cannot constrain on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid(format!(
                "jpegQuality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Invalid("output must not be empty".to_string()));
        }
        if self.landscape_dir.trim().is_empty() || self.portrait_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("image directories must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Loads and validates a configuration file.
///
/// Both single-line (`//`) and multi-line (`/* */`) comments are stripped
/// before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::Io` / `ConfigError::Parse` if it cannot be read or parsed,
/// and `ConfigError::Invalid` if a value is out of range.
pub fn load_config_from_path(path: &Path) -> Result<SplitwallConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: SplitwallConfig = serde_json::from_reader(reader)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = SplitwallConfig::default();
        assert_eq!(config.landscape_dir, "hb");
        assert_eq!(config.portrait_dir, "vb");
        assert_eq!(config.output, "Current_background.jpg");
        assert_eq!(config.interval(), Duration::from_millis(500));
        assert_eq!(config.resize, ResizeMode::Stretch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_directory_for_orientation() {
        let config = SplitwallConfig::default();
        let base = Path::new("/work");
        assert_eq!(config.directory_for(Orientation::Landscape, base), PathBuf::from("/work/hb"));
        assert_eq!(config.directory_for(Orientation::Portrait, base), PathBuf::from("/work/vb"));
    }

    #[test]
    fn test_output_path_absolute_is_kept() {
        let config = SplitwallConfig {
            output: "/tmp/wall.jpg".to_string(),
            ..Default::default()
        };
        assert_eq!(config.output_path(Path::new("/work")), PathBuf::from("/tmp/wall.jpg"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{ "intervalMs": 60000, "resize": "cover" }"#;
        let config: SplitwallConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.interval_ms, 60000);
        assert_eq!(config.resize, ResizeMode::Cover);
        assert_eq!(config.landscape_dir, "hb");
        assert_eq!(config.jpeg_quality, 95);
    }

    #[test]
    fn test_validate_rejects_bad_quality() {
        let config = SplitwallConfig {
            jpeg_quality: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = SplitwallConfig {
            jpeg_quality: 101,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let config = SplitwallConfig {
            output: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_config_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("splitwall.jsonc");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{
                // seconds are too coarse, use milliseconds
                "intervalMs": 2500,
                /* portrait screens */
                "portraitDir": "~/Pictures/tall"
            }}"#
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.interval_ms, 2500);
        assert_eq!(config.portrait_dir, "~/Pictures/tall");
        assert_eq!(config.landscape_dir, "hb");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/splitwall.jsonc"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_config_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.jsonc");
        fs::write(&path, "{ \"intervalMs\": ").unwrap();

        let result = load_config_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_unknown_resize_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, r#"{ "resize": "tile" }"#).unwrap();

        assert!(matches!(load_config_from_path(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound(PathBuf::from("/a/b.jsonc"));
        assert!(err.to_string().contains("/a/b.jsonc"));

        let err = ConfigError::Invalid("jpegQuality".to_string());
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
