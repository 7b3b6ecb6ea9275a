use serde::Serialize;

/// Capacity counters for one volume, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StorageSnapshot {
    pub used: u64,
    pub free: u64,
    pub total: u64,
}

impl StorageSnapshot {
    /// Fraction of the volume in use (0.0 - 1.0), zero for an empty snapshot
    pub fn used_fraction(&self) -> f64 {
        if self.total > 0 {
            self.used as f64 / self.total as f64
        } else {
            0.0
        }
    }

    /// Usage percentage (0.0 - 100.0)
    pub fn percent(&self) -> f64 {
        self.used_fraction() * 100.0
    }

    /// Human-readable used space
    pub fn used_human(&self) -> String {
        humansize::format_size(self.used, humansize::BINARY)
    }

    /// Human-readable free space
    pub fn free_human(&self) -> String {
        humansize::format_size(self.free, humansize::BINARY)
    }

    /// Human-readable total space
    pub fn total_human(&self) -> String {
        humansize::format_size(self.total, humansize::BINARY)
    }
}

/// How close the volume is to capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageLevel {
    Normal,
    /// Usage above the warning threshold (default 75%)
    Warning,
    /// Usage above the critical threshold (default 90%)
    Critical,
}

impl StorageLevel {
    /// Classify a usage percentage. Both thresholds are exclusive.
    pub fn from_percent(percent: f64, warn: u8, critical: u8) -> Self {
        if percent > critical as f64 {
            StorageLevel::Critical
        } else if percent > warn as f64 {
            StorageLevel::Warning
        } else {
            StorageLevel::Normal
        }
    }

    /// Alert text shown to the user, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            StorageLevel::Normal => None,
            StorageLevel::Warning => Some("Warning: Storage reaching capacity"),
            StorageLevel::Critical => Some("Critical: Less than 10% storage left!"),
        }
    }
}
