//! Delete command implementation.

use anyhow::Result;
use std::collections::HashSet;

use super::{confirm, print_media_table, Library, EXIT_PARTIAL_FAILURE};
use crate::cli::DeleteArgs;
use crate::config::Config;
use crate::media::{DeletionCoordinator, MediaDescriptor, MediaScanner, MediaStore, ScanReport};
use crate::state::SweepState;

/// Run the delete command.
pub fn run(args: DeleteArgs, config: &Config) -> Result<()> {
    let library = Library::open(args.library.as_deref(), config)?;
    library.authorize();

    let mut state = SweepState::new(
        config.storage.warn_threshold,
        config.storage.critical_threshold,
    );

    let scanner = MediaScanner::new(library.store.clone(), library.auth.clone());
    state.apply_scan(ScanReport {
        large_videos: if args.videos {
            scanner.large_videos()
        } else {
            Vec::new()
        },
        duplicates: if args.duplicates {
            scanner.duplicate_photos()
        } else {
            Vec::new()
        },
    });

    let selected = merge_selection(
        state.large_videos.iter().chain(state.duplicates.iter()).cloned(),
        resolve_ids(&args.id, &*library.store),
    );

    if selected.is_empty() {
        println!("Nothing to delete.");
        return Ok(());
    }

    print_media_table("Selected for deletion", &selected);

    if args.dry_run {
        println!("\n[DRY RUN] Nothing was deleted.");
        return Ok(());
    }

    let prompt = format!(
        "Delete {} item{}?",
        selected.len(),
        if selected.len() == 1 { "" } else { "s" }
    );
    if !args.force && !confirm(&prompt)? {
        println!("Aborted.");
        return Ok(());
    }

    let jobs = args.jobs.unwrap_or(config.deletion.parallel_jobs);
    let coordinator = DeletionCoordinator::new(library.store.clone(), library.auth.clone(), jobs);
    let outcome = coordinator.delete(&selected);

    let pruned = state.prune_deleted(&*library.store);
    let still_flagged = state.large_videos.len() + state.duplicates.len();
    tracing::debug!(pruned, still_flagged, "Refreshed scan lists after deletion");

    println!("\nResults:");
    println!("  Deleted: {}", outcome.success_count);
    if outcome.failed_count > 0 {
        println!("  Failed:  {}", outcome.failed_count);
    }
    if still_flagged > 0 {
        println!("  Still flagged in library: {}", still_flagged);
    }

    if outcome.failed_count > 0 {
        std::process::exit(EXIT_PARTIAL_FAILURE);
    }

    Ok(())
}

/// Scanned descriptors followed by explicit ones, keeping the first of each id
fn merge_selection(
    scanned: impl IntoIterator<Item = MediaDescriptor>,
    explicit: Vec<MediaDescriptor>,
) -> Vec<MediaDescriptor> {
    let mut seen = HashSet::new();
    scanned
        .into_iter()
        .chain(explicit)
        .filter(|d| seen.insert(d.id.clone()))
        .collect()
}

/// Build descriptors for explicit identifiers, resolving each against the store
fn resolve_ids(ids: &[String], store: &dyn MediaStore) -> Vec<MediaDescriptor> {
    ids.iter()
        .map(|id| {
            let mut descriptor = MediaDescriptor::new(id.clone(), id.clone(), "");
            if !descriptor.resolve(store) {
                tracing::warn!(id = %id, "Asset not found in library");
            }
            descriptor
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::testing::{image, FakeStore};

    #[test]
    fn test_resolve_ids_keeps_unknown_unresolved() {
        let store = FakeStore::new(vec![image("a", 1, 1, 0)]);
        let ids = vec!["a".to_string(), "missing".to_string()];

        let descriptors = resolve_ids(&ids, &store);

        assert_eq!(descriptors.len(), 2);
        assert!(descriptors[0].is_resolved());
        assert!(!descriptors[1].is_resolved());
    }

    #[test]
    fn test_merge_selection_drops_repeated_ids() {
        let store = FakeStore::new(vec![image("a", 1, 1, 0), image("b", 1, 1, 0)]);
        let scanned = vec![
            MediaDescriptor::new("a", "Duplicate", "1x1"),
            MediaDescriptor::new("b", "Duplicate", "1x1"),
        ];
        let explicit = resolve_ids(&["b".to_string(), "b".to_string()], &store);

        let merged = merge_selection(scanned, explicit);

        let ids: Vec<&str> = merged.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(merged[1].name, "Duplicate");
    }
}
