//! In-memory collaborators for unit tests.

use chrono::{TimeZone, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::asset::{AssetHandle, AssetKind, AssetRecord};
use super::store::MediaStore;
use crate::error::{Result, StoreError, SweeperError};

pub fn image(id: &str, width: u32, height: u32, created: i64) -> AssetRecord {
    record(id, AssetKind::Image, width, height, created)
}

pub fn video(id: &str, width: u32, height: u32) -> AssetRecord {
    record(id, AssetKind::Video, width, height, 1_700_000_000)
}

fn record(id: &str, kind: AssetKind, width: u32, height: u32, created: i64) -> AssetRecord {
    AssetRecord {
        id: id.to_string(),
        kind,
        pixel_width: width,
        pixel_height: height,
        created_at: Utc.timestamp_opt(created, 0).single(),
    }
}

/// Store holding records in memory, counting delete calls
pub struct FakeStore {
    assets: Mutex<Vec<AssetRecord>>,
    rejected: HashSet<String>,
    fail_fetch: bool,
    delete_calls: AtomicUsize,
}

impl FakeStore {
    pub fn new(assets: Vec<AssetRecord>) -> Self {
        Self {
            assets: Mutex::new(assets),
            rejected: HashSet::new(),
            fail_fetch: false,
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Reject deletion of these identifiers
    pub fn rejecting(mut self, ids: &[&str]) -> Self {
        self.rejected = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Fail every enumeration
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.assets.lock().unwrap().len()
    }
}

impl MediaStore for FakeStore {
    fn fetch_assets(&self, kind: AssetKind) -> Result<Vec<AssetRecord>> {
        if self.fail_fetch {
            return Err(SweeperError::Other("library unavailable".into()));
        }
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.kind == kind)
            .cloned()
            .collect())
    }

    fn resolve(&self, id: &str) -> Option<AssetHandle> {
        self.assets
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.handle())
    }

    fn delete_asset(&self, handle: &AssetHandle) -> std::result::Result<(), StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.rejected.contains(handle.id()) {
            return Err(StoreError::Rejected(handle.id().to_string()));
        }
        let mut assets = self.assets.lock().unwrap();
        let before = assets.len();
        assets.retain(|a| a.id != handle.id());
        if assets.len() == before {
            return Err(StoreError::AssetNotFound(handle.id().to_string()));
        }
        Ok(())
    }
}
