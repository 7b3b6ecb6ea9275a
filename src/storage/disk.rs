use std::path::Path;

use nix::sys::statvfs::statvfs;

use super::types::StorageSnapshot;
use crate::error::Result;

/// Query capacity counters for the volume holding `path`
pub fn check_volume(path: &Path) -> Result<StorageSnapshot> {
    let stat = statvfs(path)?;

    let block_size = stat.fragment_size() as u64;
    let total = stat.blocks() as u64 * block_size;
    // Free is what an unprivileged user can still write, so reserved blocks count as used
    let free = stat.blocks_available() as u64 * block_size;

    Ok(StorageSnapshot {
        used: total.saturating_sub(free),
        free,
        total,
    })
}

/// Read the storage snapshot for `path`, degrading to an empty snapshot on failure
pub fn read_snapshot(path: &Path) -> StorageSnapshot {
    match check_volume(path) {
        Ok(snapshot) => {
            tracing::debug!(
                path = %path.display(),
                used = snapshot.used,
                free = snapshot.free,
                total = snapshot.total,
                "Read storage counters"
            );
            snapshot
        }
        Err(e) => {
            tracing::warn!("Failed to read storage counters for {}: {}", path.display(), e);
            StorageSnapshot::default()
        }
    }
}
