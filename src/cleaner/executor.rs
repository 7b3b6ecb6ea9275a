//! Measures and removes cache locations.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::targets::{CacheTarget, CacheTargets};

/// Result of a cache cleanup run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupResult {
    /// Bytes freed across all locations
    pub reclaimed_bytes: u64,
    /// One message per location that failed, in target order
    pub errors: Vec<String>,
}

impl CleanupResult {
    /// Human-readable reclaimed size
    pub fn reclaimed_human(&self) -> String {
        humansize::format_size(self.reclaimed_bytes, humansize::BINARY)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Size of one existing target, for dry runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSize {
    pub label: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Removes one cache location from disk
type Remover = fn(&Path) -> io::Result<()>;

/// Clears a fixed set of cache locations
pub struct CacheCleaner {
    targets: CacheTargets,
    remove: Remover,
}

impl CacheCleaner {
    pub fn new(targets: CacheTargets) -> Self {
        Self {
            targets,
            remove: remove_path,
        }
    }

    #[cfg(test)]
    fn with_remover(mut self, remove: Remover) -> Self {
        self.remove = remove;
        self
    }

    pub fn targets(&self) -> &CacheTargets {
        &self.targets
    }

    /// Remove every existing target.
    ///
    /// Missing targets are skipped. A failure is recorded and the remaining
    /// targets are still processed.
    pub fn clear_caches(&self) -> CleanupResult {
        let mut result = CleanupResult::default();

        for target in self.targets.iter() {
            if !target.path.exists() {
                tracing::debug!(path = %target.path.display(), "Cache location absent, skipping");
                continue;
            }

            match self.clear_target(target) {
                Ok(freed) => {
                    tracing::info!(
                        path = %target.path.display(),
                        freed,
                        "Cleared cache location"
                    );
                    result.reclaimed_bytes += freed;
                }
                Err(e) => {
                    tracing::warn!("Failed to clean {}: {}", target.path.display(), e);
                    result
                        .errors
                        .push(format!("Failed to clean {}: {}", target.file_name(), e));
                }
            }
        }

        result
    }

    /// Sizes of the existing targets, without removing anything
    pub fn measure(&self) -> Vec<TargetSize> {
        self.targets
            .iter()
            .filter(|t| t.path.exists())
            .map(|t| TargetSize {
                label: t.label.clone(),
                path: t.path.clone(),
                bytes: dir_size(&t.path),
            })
            .collect()
    }

    fn clear_target(&self, target: &CacheTarget) -> io::Result<u64> {
        let before = dir_size(&target.path);
        (self.remove)(&target.path)?;
        let after = if target.path.exists() {
            dir_size(&target.path)
        } else {
            0
        };
        Ok(before.saturating_sub(after))
    }
}

/// Total size of regular files under `path` (or of `path` itself if it is a file)
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
