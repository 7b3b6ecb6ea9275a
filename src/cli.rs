use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Media Sweeper - Storage and media library cleanup utility
#[derive(Parser, Debug)]
#[command(name = "media-sweeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show storage usage for the device volume
    Overview(OverviewArgs),

    /// Scan the media library for large videos and duplicate photos
    Scan(ScanArgs),

    /// Clear application caches
    Clean(CleanArgs),

    /// Delete flagged media from the library
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Report the volume holding this path
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("only").args(["videos", "duplicates"])))]
pub struct ScanArgs {
    /// Library manifest (overrides library.manifest)
    #[arg(short, long, env = "MEDIA_SWEEPER_LIBRARY", value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Only look for large videos
    #[arg(long)]
    pub videos: bool,

    /// Only look for duplicate photos
    #[arg(long)]
    pub duplicates: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Application container holding the caches
    #[arg(long, value_name = "PATH")]
    pub container: Option<PathBuf>,

    /// Show what would be cleared without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .multiple(true)
        .args(["videos", "duplicates", "id"])
))]
pub struct DeleteArgs {
    /// Library manifest (overrides library.manifest)
    #[arg(short, long, env = "MEDIA_SWEEPER_LIBRARY", value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Delete every large video found by a scan
    #[arg(long)]
    pub videos: bool,

    /// Delete every duplicate photo found by a scan
    #[arg(long)]
    pub duplicates: bool,

    /// Delete specific assets by identifier (can be specified multiple times)
    #[arg(long, value_name = "ID")]
    pub id: Vec<String>,

    /// Show what would be deleted without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,

    /// Concurrent removal requests (overrides deletion.parallel_jobs)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}
