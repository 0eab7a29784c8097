//! Configuration loading
//!
//! Settings live in the platform config directory (`markergen/config.toml`).
//! The file is only read here; a missing file means defaults.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use markergen_types::AppConfig;

const APP_NAME: &str = "markergen";
const CONFIG_NAME: &str = "config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve configuration path")]
    Path(#[source] confy::ConfyError),

    #[error("failed to load configuration from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },
}

/// Extension trait for AppConfig loading
pub trait AppConfigExt: Sized {
    fn path() -> Result<PathBuf, ConfigError>;
    fn try_load_from(path: &Path) -> Result<Self, ConfigError>;
    fn try_load() -> Result<Self, ConfigError>;
    /// Load, falling back to defaults when the file cannot be read
    fn load(path: Option<&Path>) -> Self;
    /// Apply command-line overrides to the global settings
    fn with_overrides(self, min_interval: Option<i64>, max_tracks: Option<i64>) -> Self;
}

impl AppConfigExt for AppConfig {
    fn path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Path)
    }

    fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }
        confy::load_path(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Self::try_load_from(&Self::path()?)
    }

    fn load(path: Option<&Path>) -> Self {
        let result = match path {
            Some(path) => Self::try_load_from(path),
            None => Self::try_load(),
        };
        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default configuration");
            Self::default()
        })
    }

    fn with_overrides(mut self, min_interval: Option<i64>, max_tracks: Option<i64>) -> Self {
        if let Some(min_interval) = min_interval {
            self.global.min_interval = min_interval;
        }
        if let Some(max_tracks) = max_tracks {
            self.global.max_tracks = max_tracks;
        }
        self
    }
}
