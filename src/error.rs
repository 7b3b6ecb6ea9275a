use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SweeperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Media store error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Filesystem query failed: {0}")]
    Statvfs(#[from] nix::errno::Errno),

    #[error("No media library configured (use --library or set library.manifest)")]
    LibraryNotConfigured,

    #[error("{0}")]
    Other(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised by a media store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read library manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse library manifest '{path}': {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write library manifest '{path}': {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Failed to remove asset file '{path}': {source}")]
    AssetFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Change request rejected for asset {0}")]
    Rejected(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SweeperError>;
