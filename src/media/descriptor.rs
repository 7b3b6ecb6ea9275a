use serde::Serialize;

use super::asset::AssetHandle;
use super::store::MediaStore;

/// Lightweight description of a flagged library item.
///
/// Built in two steps: construct with identifier and labels, then attach a
/// handle with [`MediaDescriptor::resolve`] or [`MediaDescriptor::with_handle`].
/// Unresolved descriptors are skipped by deletion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaDescriptor {
    pub id: String,
    pub name: String,
    pub size_label: String,
    #[serde(skip)]
    handle: Option<AssetHandle>,
}

impl MediaDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size_label: size_label.into(),
            handle: None,
        }
    }

    /// Attach a handle the caller already holds
    pub fn with_handle(mut self, handle: AssetHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Look the identifier up in `store`, replacing any previous handle
    pub fn resolve(&mut self, store: &dyn MediaStore) -> bool {
        self.handle = if self.id.is_empty() {
            None
        } else {
            store.resolve(&self.id)
        };
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&AssetHandle> {
        self.handle.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.handle.is_some()
    }
}
