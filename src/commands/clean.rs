//! Clean command implementation.

use anyhow::Result;
use humansize::{format_size, BINARY};

use super::{confirm, EXIT_PARTIAL_FAILURE};
use crate::cleaner::{CacheCleaner, CacheTargets, TargetSize};
use crate::cli::CleanArgs;
use crate::config::Config;
use crate::storage::read_snapshot;

/// Run the clean command.
pub fn run(args: CleanArgs, config: &Config) -> Result<()> {
    let container = args.container.unwrap_or_else(|| config.container_dir());
    let targets =
        CacheTargets::for_container(&container).with_extra_paths(&config.cleaner.extra_paths);
    let cleaner = CacheCleaner::new(targets);

    tracing::info!(container = %container.display(), "Measuring cache locations");
    let sizes = cleaner.measure();

    if sizes.is_empty() {
        println!("No caches found in {}.", container.display());
        return Ok(());
    }

    print_targets_table(&sizes);

    let total: u64 = sizes.iter().map(|s| s.bytes).sum();
    println!(
        "\nTotal: {} in {} location{}",
        format_size(total, BINARY),
        sizes.len(),
        if sizes.len() == 1 { "" } else { "s" }
    );

    if args.dry_run {
        println!("\n[DRY RUN] Nothing was removed.");
        return Ok(());
    }

    if !args.force && !confirm("Clear these caches?")? {
        println!("Aborted.");
        return Ok(());
    }

    let result = cleaner.clear_caches();

    println!("\nCleaned {}", result.reclaimed_human());
    if result.has_errors() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("  {}", error);
        }
    }

    let snapshot = read_snapshot(&config.volume_path());
    println!("Storage now {}% used", snapshot.percent() as u32);

    if result.has_errors() {
        std::process::exit(EXIT_PARTIAL_FAILURE);
    }

    Ok(())
}

fn print_targets_table(sizes: &[TargetSize]) {
    println!("\n  {:<18} {:<50} {:>10}", "LOCATION", "PATH", "SIZE");
    println!("  {}", "─".repeat(80));

    for entry in sizes {
        let path_str = entry.path.display().to_string();
        let path_display = if path_str.chars().count() > 48 {
            let tail: String = path_str.chars().skip(path_str.chars().count() - 45).collect();
            format!("...{}", tail)
        } else {
            path_str
        };

        println!(
            "  {:<18} {:<50} {:>10}",
            entry.label,
            path_display,
            format_size(entry.bytes, BINARY),
        );
    }
}
