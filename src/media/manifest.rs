//! Media store backed by a JSON manifest on disk.
//!
//! ```json
//! {
//!   "assets": [
//!     { "id": "IMG_0001", "kind": "image", "pixel_width": 4032,
//!       "pixel_height": 3024, "created_at": "2024-05-01T10:00:00Z",
//!       "path": "photos/IMG_0001.heic" }
//!   ]
//! }
//! ```
//!
//! `path` is optional and relative to the manifest's directory. Deleting an
//! asset removes its file and rewrites the manifest.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::asset::{AssetHandle, AssetKind, AssetRecord};
use super::store::MediaStore;
use crate::error::{Result, StoreError};

/// One manifest entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(flatten)]
    pub record: AssetRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// On-disk manifest layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryManifest {
    #[serde(default)]
    pub assets: Vec<ManifestEntry>,
}

impl LibraryManifest {
    pub fn read(path: &Path) -> std::result::Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write(&self, path: &Path) -> std::result::Result<(), StoreError> {
        let write_err = |source| StoreError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        };
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        // Write beside the target and rename so readers never see a partial manifest
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)
    }
}

/// [`MediaStore`] reading and mutating a [`LibraryManifest`]
pub struct ManifestStore {
    manifest_path: PathBuf,
    root: PathBuf,
    manifest: Mutex<LibraryManifest>,
}

impl ManifestStore {
    /// Open the manifest at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let manifest = LibraryManifest::read(path)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::debug!(
            path = %path.display(),
            assets = manifest.assets.len(),
            "Opened library manifest"
        );

        Ok(Self {
            manifest_path: path.to_path_buf(),
            root,
            manifest: Mutex::new(manifest),
        })
    }

    /// Number of assets currently in the library
    pub fn len(&self) -> usize {
        self.lock().assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, LibraryManifest> {
        self.manifest.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn remove_file(&self, relative: &Path) -> std::result::Result<(), StoreError> {
        let path = self.root.join(relative);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Asset file already gone");
                Ok(())
            }
            Err(source) => Err(StoreError::AssetFile { path, source }),
        }
    }
}

impl MediaStore for ManifestStore {
    fn fetch_assets(&self, kind: AssetKind) -> Result<Vec<AssetRecord>> {
        Ok(self
            .lock()
            .assets
            .iter()
            .filter(|e| e.record.kind == kind)
            .map(|e| e.record.clone())
            .collect())
    }

    fn resolve(&self, id: &str) -> Option<AssetHandle> {
        self.lock()
            .assets
            .iter()
            .find(|e| e.record.id == id)
            .map(|e| e.record.handle())
    }

    fn delete_asset(&self, handle: &AssetHandle) -> std::result::Result<(), StoreError> {
        let mut manifest = self.lock();
        let index = manifest
            .assets
            .iter()
            .position(|e| e.record.id == handle.id())
            .ok_or_else(|| StoreError::AssetNotFound(handle.id().to_string()))?;

        if let Some(relative) = &manifest.assets[index].path {
            self.remove_file(relative)?;
        }

        let entry = manifest.assets.remove(index);
        if let Err(e) = manifest.write(&self.manifest_path) {
            manifest.assets.insert(index, entry);
            return Err(e);
        }
        Ok(())
    }
}
