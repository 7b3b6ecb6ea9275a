//! Media library access: assets, descriptors, scanning and deletion.
//!
//! The library store and the authorization state are collaborators behind
//! the [`MediaStore`] and [`LibraryAuthorization`] traits, so scans and
//! deletions run the same way against the on-disk manifest store and the
//! fakes used in tests.

mod asset;
mod auth;
mod deletion;
mod descriptor;
mod manifest;
mod scanner;
mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use asset::{AssetHandle, AssetKind, AssetRecord};
pub use auth::{AuthorizationStatus, LibraryAuthorization, StaticAuthorization};
pub use deletion::{DeletionCoordinator, DeletionOutcome};
pub use descriptor::MediaDescriptor;
pub use manifest::{LibraryManifest, ManifestStore};
pub use scanner::{
    MediaScanner, ScanReport, DUPLICATE_REPORT_CAP, LARGE_VIDEO_THRESHOLD,
};
pub use store::MediaStore;
