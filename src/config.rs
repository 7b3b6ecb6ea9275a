use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::media::AuthorizationStatus;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub library: LibraryConfig,
    pub cleaner: CleanerConfig,
    pub deletion: DeletionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path whose volume is reported (None = home directory)
    pub volume: Option<PathBuf>,
    /// Warning above this used percentage (0-100)
    pub warn_threshold: u8,
    /// Critical above this used percentage (0-100)
    pub critical_threshold: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// JSON manifest describing the media library
    pub manifest: Option<PathBuf>,
    /// Access level granted to the library
    pub authorization: AuthorizationStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Application container whose caches are cleared (None = platform default)
    pub container_dir: Option<PathBuf>,
    /// Additional cache locations to clear
    pub extra_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletionConfig {
    /// Concurrent removal requests
    pub parallel_jobs: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            volume: None,
            warn_threshold: 75,
            critical_threshold: 90,
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            authorization: AuthorizationStatus::Full,
        }
    }
}

impl Default for DeletionConfig {
    fn default() -> Self {
        Self { parallel_jobs: 4 }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("media-sweeper").join("config.toml"))
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let storage = &self.storage;
        if storage.critical_threshold > 100 {
            return Err(ConfigError::Invalid(
                "critical_threshold must be between 0 and 100".into(),
            ));
        }
        if storage.warn_threshold >= storage.critical_threshold {
            return Err(ConfigError::Invalid(
                "warn_threshold must be below critical_threshold".into(),
            ));
        }
        if self.deletion.parallel_jobs == 0 {
            return Err(ConfigError::Invalid(
                "deletion.parallel_jobs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Volume path to report on
    pub fn volume_path(&self) -> PathBuf {
        self.storage
            .volume
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"))
    }

    /// Application container holding the clearable caches
    pub fn container_dir(&self) -> PathBuf {
        self.cleaner.container_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("media-sweeper")
        })
    }
}
