//! View state shared by the commands: storage usage and current scan lists.

use crate::media::{MediaDescriptor, MediaStore, ScanReport};
use crate::storage::{StorageLevel, StorageSnapshot};

/// Current storage reading and the media flagged by the last scan
#[derive(Debug, Clone)]
pub struct SweepState {
    warn_threshold: u8,
    critical_threshold: u8,
    pub storage: StorageSnapshot,
    pub level: StorageLevel,
    pub large_videos: Vec<MediaDescriptor>,
    pub duplicates: Vec<MediaDescriptor>,
}

impl SweepState {
    pub fn new(warn_threshold: u8, critical_threshold: u8) -> Self {
        Self {
            warn_threshold,
            critical_threshold,
            storage: StorageSnapshot::default(),
            level: StorageLevel::Normal,
            large_videos: Vec::new(),
            duplicates: Vec::new(),
        }
    }

    /// Record a new storage reading and reclassify it
    pub fn refresh_storage(&mut self, snapshot: StorageSnapshot) {
        self.storage = snapshot;
        self.level = StorageLevel::from_percent(
            snapshot.percent(),
            self.warn_threshold,
            self.critical_threshold,
        );
    }

    /// Used fraction of the volume (0.0 - 1.0)
    pub fn used_fraction(&self) -> f64 {
        self.storage.used_fraction()
    }

    /// Alert text for the current level
    pub fn alert_message(&self) -> Option<&'static str> {
        self.level.message()
    }

    /// Replace both lists with the results of a new scan
    pub fn apply_scan(&mut self, report: ScanReport) {
        self.large_videos = report.large_videos;
        self.duplicates = report.duplicates;
    }

    /// Drop descriptors whose assets no longer exist in `store`.
    ///
    /// Returns how many were removed.
    pub fn prune_deleted(&mut self, store: &dyn MediaStore) -> usize {
        let before = self.large_videos.len() + self.duplicates.len();
        self.large_videos.retain_mut(|d| d.resolve(store));
        self.duplicates.retain_mut(|d| d.resolve(store));
        let removed = before - (self.large_videos.len() + self.duplicates.len());
        if removed > 0 {
            tracing::debug!(removed, "Pruned deleted media from state");
        }
        removed
    }
}
