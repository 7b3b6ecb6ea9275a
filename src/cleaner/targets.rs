//! Well-known cache locations.

use std::path::{Path, PathBuf};

/// One location the cleaner may clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTarget {
    /// Short label for reports
    pub label: String,
    pub path: PathBuf,
}

impl CacheTarget {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Last path component, used in error messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Ordered set of cache locations
#[derive(Debug, Clone, Default)]
pub struct CacheTargets {
    targets: Vec<CacheTarget>,
}

impl CacheTargets {
    /// Standard locations inside an application container.
    ///
    /// # Example
    /// ```
    /// use media_sweeper::cleaner::CacheTargets;
    ///
    /// let targets = CacheTargets::for_container("/data/app");
    /// assert_eq!(targets.len(), 4);
    /// ```
    pub fn for_container(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let library = root.join("Library");
        Self {
            targets: vec![
                CacheTarget::new("Caches", root.join("Caches")),
                CacheTarget::new("Library Caches", library.join("Caches")),
                CacheTarget::new("Temporary Files", root.join("tmp")),
                CacheTarget::new("Browser Cache", library.join("Safari").join("Cache.db")),
            ],
        }
    }

    /// Append extra locations, labelled by their file name
    pub fn with_extra_paths(mut self, paths: &[PathBuf]) -> Self {
        for path in paths {
            let target = CacheTarget::new(String::new(), path.clone());
            let label = target.file_name();
            self.targets.push(CacheTarget { label, ..target });
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &CacheTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
