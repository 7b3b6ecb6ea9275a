//! Overview command implementation

use serde::Serialize;

use crate::cli::OverviewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::state::SweepState;
use crate::storage::{read_snapshot, StorageLevel, StorageSnapshot};

#[derive(Debug, Serialize)]
struct OverviewReport<'a> {
    #[serde(flatten)]
    snapshot: StorageSnapshot,
    percent: f64,
    level: StorageLevel,
    message: Option<&'a str>,
}

/// Run the overview command
pub fn run(args: OverviewArgs, config: &Config) -> Result<()> {
    let path = args.path.unwrap_or_else(|| config.volume_path());
    tracing::info!(path = %path.display(), "Reading storage overview");

    let mut state = SweepState::new(
        config.storage.warn_threshold,
        config.storage.critical_threshold,
    );
    state.refresh_storage(read_snapshot(&path));

    if args.json {
        let report = OverviewReport {
            snapshot: state.storage,
            percent: state.storage.percent(),
            level: state.level,
            message: state.alert_message(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", format_overview(&state));
    Ok(())
}

fn format_overview(state: &SweepState) -> String {
    let storage = &state.storage;
    let mut out = format!(
        "Storage: {}% used\n  Used:  {}\n  Free:  {}\n  Total: {}\n",
        (state.used_fraction() * 100.0) as u32,
        storage.used_human(),
        storage.free_human(),
        storage.total_human(),
    );
    if let Some(message) = state.alert_message() {
        out.push_str(&format!("\n{}\n", message));
    }
    out
}
