//! Storage overview: capacity counters for the volume holding a path.

pub mod disk;
pub mod types;

pub use disk::{check_volume, read_snapshot};
pub use types::{StorageLevel, StorageSnapshot};
