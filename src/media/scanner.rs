//! Large-video and duplicate-photo queries over the media library.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::asset::{AssetKind, AssetRecord};
use super::auth::LibraryAuthorization;
use super::descriptor::MediaDescriptor;
use super::store::MediaStore;

/// Videos whose megapixel count exceeds this are reported as large.
pub const LARGE_VIDEO_THRESHOLD: f64 = 100.0;

/// Members reported from each duplicate cluster, however large it is.
pub const DUPLICATE_REPORT_CAP: usize = 2;

/// Joined result of both library queries
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub large_videos: Vec<MediaDescriptor>,
    pub duplicates: Vec<MediaDescriptor>,
}

/// Read-only queries over the media library
pub struct MediaScanner {
    store: Arc<dyn MediaStore>,
    auth: Arc<dyn LibraryAuthorization>,
}

type DuplicateKey = (u32, u32, i64);

impl MediaScanner {
    pub fn new(store: Arc<dyn MediaStore>, auth: Arc<dyn LibraryAuthorization>) -> Self {
        Self { store, auth }
    }

    /// Run both queries concurrently and join their results
    pub fn scan_all(&self) -> ScanReport {
        let (large_videos, duplicates) =
            rayon::join(|| self.large_videos(), || self.duplicate_photos());

        tracing::info!(
            large_videos = large_videos.len(),
            duplicates = duplicates.len(),
            "Library scan complete"
        );

        ScanReport {
            large_videos,
            duplicates,
        }
    }

    /// Videos whose size proxy exceeds [`LARGE_VIDEO_THRESHOLD`], largest first
    pub fn large_videos(&self) -> Vec<MediaDescriptor> {
        let Some(assets) = self.fetch(AssetKind::Video) else {
            return Vec::new();
        };

        let mut large: Vec<(f64, MediaDescriptor)> = assets
            .into_iter()
            .filter_map(|asset| {
                let proxy = asset.size_proxy();
                if proxy <= LARGE_VIDEO_THRESHOLD {
                    return None;
                }
                let name = asset.created_label().unwrap_or_else(|| "Video".to_string());
                let label = format!("{}MB", proxy as u64);
                let descriptor =
                    MediaDescriptor::new(asset.id.clone(), name, label).with_handle(asset.handle());
                Some((proxy, descriptor))
            })
            .collect();

        large.sort_by(|a, b| b.0.total_cmp(&a.0));
        large.into_iter().map(|(_, d)| d).collect()
    }

    /// Photos sharing dimensions and creation second with another photo.
    ///
    /// At most [`DUPLICATE_REPORT_CAP`] members of each cluster are reported,
    /// in library order. Clusters appear in order of first occurrence.
    pub fn duplicate_photos(&self) -> Vec<MediaDescriptor> {
        let Some(assets) = self.fetch(AssetKind::Image) else {
            return Vec::new();
        };

        group_by_key(assets)
            .into_iter()
            .filter(|cluster| cluster.len() > 1)
            .flat_map(|cluster| cluster.into_iter().take(DUPLICATE_REPORT_CAP))
            .map(|asset| {
                let name = format!("Duplicate {}", asset.created_label().unwrap_or_default());
                let label = format!("{}x{}", asset.pixel_width, asset.pixel_height);
                MediaDescriptor::new(asset.id.clone(), name.trim_end(), label)
                    .with_handle(asset.handle())
            })
            .collect()
    }

    /// Enumerate `kind` if authorized; `None` means report nothing
    fn fetch(&self, kind: AssetKind) -> Option<Vec<AssetRecord>> {
        let status = self.auth.status();
        if !status.is_authorized() {
            tracing::info!(?status, ?kind, "Library access not authorized, skipping query");
            return None;
        }

        match self.store.fetch_assets(kind) {
            Ok(assets) => {
                tracing::debug!(?kind, count = assets.len(), "Enumerated library assets");
                Some(assets)
            }
            Err(e) => {
                tracing::warn!("Failed to enumerate {:?} assets: {}", kind, e);
                None
            }
        }
    }
}

/// Group assets by (width, height, creation second), keeping first-seen order
fn group_by_key(assets: Vec<AssetRecord>) -> Vec<Vec<AssetRecord>> {
    let mut index: HashMap<DuplicateKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<AssetRecord>> = Vec::new();

    for asset in assets {
        let key = (asset.pixel_width, asset.pixel_height, asset.created_second());
        match index.get(&key) {
            Some(&slot) => groups[slot].push(asset),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![asset]);
            }
        }
    }

    groups
}
