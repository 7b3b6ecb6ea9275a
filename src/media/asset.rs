use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media held by the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
}

/// Metadata the store exposes for one library entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Stable identifier, unique within the library
    pub id: String,
    pub kind: AssetKind,
    pub pixel_width: u32,
    pub pixel_height: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AssetRecord {
    /// Megapixel count, used as a stand-in for file size
    pub fn size_proxy(&self) -> f64 {
        (self.pixel_width as u64 * self.pixel_height as u64) as f64 / 1_000_000.0
    }

    /// Creation time truncated to whole seconds, 0 when unknown
    pub fn created_second(&self) -> i64 {
        self.created_at.map(|t| t.timestamp()).unwrap_or(0)
    }

    /// Creation time as shown to the user
    pub fn created_label(&self) -> Option<String> {
        self.created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
    }

    /// Handle referring to this record
    pub fn handle(&self) -> AssetHandle {
        AssetHandle::new(self.id.clone())
    }
}

/// Opaque reference to an asset owned by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    id: String,
}

impl AssetHandle {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Identifier of the referenced asset
    pub fn id(&self) -> &str {
        &self.id
    }
}
