//! Bulk removal of flagged media.

use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

use super::auth::LibraryAuthorization;
use super::descriptor::MediaDescriptor;
use super::store::MediaStore;

/// Tally of a deletion batch. `success_count + failed_count` equals the batch size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeletionOutcome {
    pub success_count: usize,
    pub failed_count: usize,
}

impl DeletionOutcome {
    /// Outcome where every item failed
    pub fn all_failed(count: usize) -> Self {
        Self {
            success_count: 0,
            failed_count: count,
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failed_count
    }
}

/// Submits one removal per descriptor and waits for all of them
pub struct DeletionCoordinator {
    store: Arc<dyn MediaStore>,
    auth: Arc<dyn LibraryAuthorization>,
    parallelism: usize,
}

impl DeletionCoordinator {
    pub fn new(
        store: Arc<dyn MediaStore>,
        auth: Arc<dyn LibraryAuthorization>,
        parallelism: usize,
    ) -> Self {
        Self {
            store,
            auth,
            parallelism: parallelism.max(1),
        }
    }

    /// Delete every resolved descriptor in `items`.
    ///
    /// Unresolved descriptors fail without reaching the store. Each removal
    /// stands alone: a failure neither blocks nor rolls back the others.
    pub fn delete(&self, items: &[MediaDescriptor]) -> DeletionOutcome {
        let status = self.auth.status();
        if !status.is_authorized() {
            tracing::warn!(?status, count = items.len(), "Library access not authorized, nothing deleted");
            return DeletionOutcome::all_failed(items.len());
        }

        let (resolved, unresolved): (Vec<&MediaDescriptor>, Vec<&MediaDescriptor>) =
            items.iter().partition(|d| d.is_resolved());

        for item in &unresolved {
            tracing::debug!(id = %item.id, "No library asset for descriptor");
        }

        let succeeded = self.submit_all(&resolved);

        let outcome = DeletionOutcome {
            success_count: succeeded,
            failed_count: items.len() - succeeded,
        };
        tracing::info!(
            deleted = outcome.success_count,
            failed = outcome.failed_count,
            "Deletion batch complete"
        );
        outcome
    }

    /// Fan out removals on a bounded pool; returns how many succeeded
    fn submit_all(&self, items: &[&MediaDescriptor]) -> usize {
        if items.is_empty() {
            return 0;
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallelism)
            .build()
        {
            Ok(pool) => pool.install(|| items.par_iter().filter(|d| self.submit(d)).count()),
            Err(e) => {
                tracing::warn!("Failed to build deletion pool, removing sequentially: {}", e);
                items.iter().filter(|d| self.submit(d)).count()
            }
        }
    }

    fn submit(&self, item: &MediaDescriptor) -> bool {
        let Some(handle) = item.handle() else {
            return false;
        };

        match self.store.delete_asset(handle) {
            Ok(()) => {
                tracing::debug!(id = %item.id, "Deleted asset");
                true
            }
            Err(e) => {
                tracing::warn!("Deletion error for {}: {}", item.id, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::testing::{image, FakeStore};
    use crate::media::{AuthorizationStatus, StaticAuthorization};

    fn resolved(store: &FakeStore, id: &str) -> MediaDescriptor {
        let mut d = MediaDescriptor::new(id, "Photo", "1x1");
        assert!(d.resolve(store));
        d
    }

    fn coordinator(store: Arc<FakeStore>, status: AuthorizationStatus) -> DeletionCoordinator {
        DeletionCoordinator::new(store, Arc::new(StaticAuthorization::new(status)), 4)
    }

    #[test]
    fn test_mixed_batch_counts() {
        let store = Arc::new(FakeStore::new(vec![
            image("a", 1, 1, 0),
            image("b", 1, 1, 0),
            image("c", 1, 1, 0),
        ]));

        let batch = vec![
            resolved(&store, "a"),
            MediaDescriptor::new("gone-1", "Photo", "1x1"),
            resolved(&store, "b"),
            MediaDescriptor::new("gone-2", "Photo", "1x1"),
            resolved(&store, "c"),
        ];

        let outcome = coordinator(Arc::clone(&store), AuthorizationStatus::Full).delete(&batch);

        assert_eq!(
            outcome,
            DeletionOutcome {
                success_count: 3,
                failed_count: 2
            }
        );
        assert_eq!(store.delete_calls(), 3);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_unresolved_never_reach_store() {
        let store = Arc::new(FakeStore::new(vec![image("a", 1, 1, 0)]));
        let batch = vec![
            MediaDescriptor::new("a", "Photo", "1x1"),
            MediaDescriptor::new("", "Photo", "1x1"),
        ];

        let outcome = coordinator(Arc::clone(&store), AuthorizationStatus::Full).delete(&batch);

        assert_eq!(outcome, DeletionOutcome::all_failed(2));
        assert_eq!(store.delete_calls(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_failures_are_independent() {
        let store = Arc::new(
            FakeStore::new(vec![
                image("a", 1, 1, 0),
                image("b", 1, 1, 0),
                image("c", 1, 1, 0),
            ])
            .rejecting(&["b"]),
        );
        let batch = vec![
            resolved(&store, "a"),
            resolved(&store, "b"),
            resolved(&store, "c"),
        ];

        let outcome = coordinator(Arc::clone(&store), AuthorizationStatus::Full).delete(&batch);

        assert_eq!(outcome.success_count, 2);
        assert_eq!(outcome.failed_count, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unauthorized_fails_everything() {
        let store = Arc::new(FakeStore::new(vec![image("a", 1, 1, 0), image("b", 1, 1, 0)]));
        let batch = vec![resolved(&store, "a"), resolved(&store, "b")];

        for status in [AuthorizationStatus::Denied, AuthorizationStatus::NotDetermined] {
            let outcome = coordinator(Arc::clone(&store), status).delete(&batch);
            assert_eq!(outcome, DeletionOutcome::all_failed(2));
        }
        assert_eq!(store.delete_calls(), 0);
    }

    #[test]
    fn test_total_matches_batch_size() {
        let assets: Vec<_> = (0..20).map(|i| image(&format!("p{}", i), 1, 1, 0)).collect();
        let store = Arc::new(FakeStore::new(assets).rejecting(&["p3", "p7"]));

        let mut batch: Vec<MediaDescriptor> =
            (0..20).map(|i| resolved(&store, &format!("p{}", i))).collect();
        batch.push(MediaDescriptor::new("missing", "Photo", "1x1"));

        let outcome = coordinator(Arc::clone(&store), AuthorizationStatus::Full).delete(&batch);

        assert_eq!(outcome.total(), batch.len());
        assert_eq!(outcome.success_count, 18);
        assert_eq!(outcome.failed_count, 3);
    }

    #[test]
    fn test_empty_batch() {
        let store = Arc::new(FakeStore::new(vec![]));
        let outcome = coordinator(store, AuthorizationStatus::Full).delete(&[]);
        assert_eq!(outcome, DeletionOutcome::default());
    }

    #[test]
    fn test_deleting_twice_fails_second_time() {
        let store = Arc::new(FakeStore::new(vec![image("a", 1, 1, 0)]));
        let batch = vec![resolved(&store, "a")];
        let coord = coordinator(Arc::clone(&store), AuthorizationStatus::Full);

        assert_eq!(coord.delete(&batch).success_count, 1);
        assert_eq!(coord.delete(&batch).failed_count, 1);
    }
}
