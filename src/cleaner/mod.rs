//! Application cache cleanup.
//!
//! This module provides:
//! - The fixed list of cache locations inside an application container
//! - Measurement and removal of those locations with per-location error capture

mod executor;
mod targets;

pub use executor::{dir_size, CacheCleaner, CleanupResult, TargetSize};
pub use targets::{CacheTarget, CacheTargets};
