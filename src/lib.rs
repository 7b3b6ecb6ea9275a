//! Media Sweeper - A storage and media library cleanup utility
//!
//! This crate provides functionality for:
//! - Reporting storage usage for the device volume
//! - Finding large videos and duplicate photos in a media library
//! - Clearing application caches
//! - Bulk deletion of flagged media

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweeperError};
