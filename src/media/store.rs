use super::asset::{AssetHandle, AssetKind, AssetRecord};
use crate::error::{Result, StoreError};

/// A managed collection of photo and video assets
pub trait MediaStore: Send + Sync {
    /// Enumerate every asset of `kind`, in library order
    fn fetch_assets(&self, kind: AssetKind) -> Result<Vec<AssetRecord>>;

    /// Look up the handle for an identifier, if the asset still exists
    fn resolve(&self, id: &str) -> Option<AssetHandle>;

    /// Remove one asset. Blocks until the store reports completion.
    fn delete_asset(&self, handle: &AssetHandle) -> std::result::Result<(), StoreError>;
}
