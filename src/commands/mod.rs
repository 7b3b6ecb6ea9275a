//! Subcommand implementations.

pub mod clean;
pub mod delete;
pub mod overview;
pub mod scan;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Result, SweeperError};
use crate::media::{
    AuthorizationStatus, LibraryAuthorization, ManifestStore, MediaDescriptor,
    StaticAuthorization,
};

/// Exit status for runs that finished with partial failures
pub const EXIT_PARTIAL_FAILURE: i32 = 5;

/// Media library collaborators for one command run
pub struct Library {
    pub store: Arc<ManifestStore>,
    pub auth: Arc<StaticAuthorization>,
}

impl Library {
    /// Open the manifest named on the command line or in the config
    pub fn open(library: Option<&Path>, config: &Config) -> Result<Self> {
        let path = library
            .or(config.library.manifest.as_deref())
            .ok_or(SweeperError::LibraryNotConfigured)?;

        let store = ManifestStore::open(path)?;
        let auth = StaticAuthorization::new(config.library.authorization);

        Ok(Self {
            store: Arc::new(store),
            auth: Arc::new(auth),
        })
    }

    /// Current authorization, asking for access first if it was never decided
    pub fn authorize(&self) -> AuthorizationStatus {
        let status = match self.auth.status() {
            AuthorizationStatus::NotDetermined => self.auth.request(),
            status => status,
        };
        if !status.is_authorized() {
            eprintln!(
                "Media library access is {:?}; grant access (library.authorization) to scan or delete.",
                status
            );
        }
        status
    }
}

/// Ask the user a yes/no question on stdin
pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    print!("\n{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

pub(crate) fn print_media_table(title: &str, items: &[MediaDescriptor]) {
    println!("\n{} ({})", title, items.len());
    if items.is_empty() {
        return;
    }

    println!("  {:<28} {:<32} {:>10}", "ID", "NAME", "SIZE");
    println!("  {}", "─".repeat(72));

    for item in items {
        println!(
            "  {:<28} {:<32} {:>10}",
            truncate(&item.id, 28),
            truncate(&item.name, 32),
            item.size_label,
        );
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let tail: String = s
        .chars()
        .rev()
        .take(width.saturating_sub(3))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{}", tail)
}
