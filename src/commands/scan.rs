//! Scan command implementation

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::{print_media_table, Library};
use crate::cli::ScanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::media::{MediaScanner, ScanReport};
use crate::state::SweepState;

/// Run the scan command
pub fn run(args: ScanArgs, config: &Config, quiet: bool) -> Result<()> {
    let library = Library::open(args.library.as_deref(), config)?;
    library.authorize();

    let scanner = MediaScanner::new(library.store.clone(), library.auth.clone());

    let spinner = spinner(quiet || args.json);
    let report = if args.videos {
        ScanReport {
            large_videos: scanner.large_videos(),
            ..Default::default()
        }
    } else if args.duplicates {
        ScanReport {
            duplicates: scanner.duplicate_photos(),
            ..Default::default()
        }
    } else {
        scanner.scan_all()
    };
    spinner.finish_and_clear();

    let mut state = SweepState::new(
        config.storage.warn_threshold,
        config.storage.critical_threshold,
    );
    state.apply_scan(report);

    if args.json {
        let report = ScanReport {
            large_videos: state.large_videos,
            duplicates: state.duplicates,
        };
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
        return Ok(());
    }

    if !args.duplicates {
        print_media_table("Large videos", &state.large_videos);
    }
    if !args.videos {
        print_media_table("Duplicate photos", &state.duplicates);
    }

    Ok(())
}

fn spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Scanning media library...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
