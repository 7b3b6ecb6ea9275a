//! Integration tests for the clean command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn media_sweeper(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("media-sweeper").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env_remove("MEDIA_SWEEPER_LIBRARY");
    cmd
}

/// Create an application container with every kind of cache location.
fn create_test_container() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir_all(root.join("Caches/thumbnails")).unwrap();
    fs::write(root.join("Caches/thumbnails/0001.jpg"), "x".repeat(40000)).unwrap();
    fs::write(root.join("Caches/index.db"), "x".repeat(10000)).unwrap();

    fs::create_dir_all(root.join("Library/Caches/previews")).unwrap();
    fs::write(
        root.join("Library/Caches/previews/frame.png"),
        "x".repeat(20000),
    )
    .unwrap();

    fs::create_dir_all(root.join("tmp")).unwrap();
    fs::write(root.join("tmp/upload.part"), "x".repeat(5000)).unwrap();

    fs::create_dir_all(root.join("Library/Safari")).unwrap();
    fs::write(root.join("Library/Safari/Cache.db"), "x".repeat(3000)).unwrap();

    // Not a cache: must survive
    fs::create_dir_all(root.join("Documents")).unwrap();
    fs::write(root.join("Documents/notes.txt"), "keep me").unwrap();

    tmp
}

#[test]
fn test_dry_run_lists_but_keeps_caches() {
    let home = TempDir::new().unwrap();
    let container = create_test_container();

    media_sweeper(&home)
        .args(["clean", "--dry-run", "--container"])
        .arg(container.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Caches"))
        .stdout(predicate::str::contains("Browser Cache"))
        .stdout(predicate::str::contains("4 locations"))
        .stdout(predicate::str::contains("DRY RUN"));

    assert!(container.path().join("Caches/index.db").exists());
    assert!(container.path().join("tmp/upload.part").exists());
}

#[test]
fn test_clean_removes_caches() {
    let home = TempDir::new().unwrap();
    let container = create_test_container();

    media_sweeper(&home)
        .args(["clean", "--force", "--container"])
        .arg(container.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned"));

    assert!(!container.path().join("Caches").exists());
    assert!(!container.path().join("Library/Caches").exists());
    assert!(!container.path().join("tmp").exists());
    assert!(!container.path().join("Library/Safari/Cache.db").exists());

    assert!(container.path().join("Documents/notes.txt").exists());
}

#[test]
fn test_clean_without_confirmation_aborts() {
    let home = TempDir::new().unwrap();
    let container = create_test_container();

    media_sweeper(&home)
        .args(["clean", "--container"])
        .arg(container.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    assert!(container.path().join("Caches").exists());
}

#[test]
fn test_clean_confirmed_on_stdin() {
    let home = TempDir::new().unwrap();
    let container = create_test_container();

    media_sweeper(&home)
        .args(["clean", "--container"])
        .arg(container.path())
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(!container.path().join("Caches").exists());
}

#[test]
fn test_empty_container_reports_nothing() {
    let home = TempDir::new().unwrap();
    let container = TempDir::new().unwrap();

    media_sweeper(&home)
        .args(["clean", "--force", "--container"])
        .arg(container.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No caches found"));
}

#[test]
fn test_extra_paths_from_config() {
    let home = TempDir::new().unwrap();
    let container = TempDir::new().unwrap();
    let extra = TempDir::new().unwrap();
    let thumbs = extra.path().join("thumbs");
    fs::create_dir_all(&thumbs).unwrap();
    fs::write(thumbs.join("a.jpg"), "x".repeat(1000)).unwrap();

    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[cleaner]\ncontainer_dir = {:?}\nextra_paths = [{:?}]\n",
            container.path().display().to_string(),
            thumbs.display().to_string()
        ),
    )
    .unwrap();

    media_sweeper(&home)
        .arg("--config")
        .arg(&config)
        .args(["clean", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("thumbs"));

    assert!(!thumbs.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_unremovable_location_is_partial_failure() {
    let home = TempDir::new().unwrap();
    let container = create_test_container();

    // procfs entries cannot be unlinked, even by root
    let config = home.path().join("custom.toml");
    fs::write(&config, "[cleaner]\nextra_paths = [\"/proc/self/fd\"]\n").unwrap();

    media_sweeper(&home)
        .arg("--config")
        .arg(&config)
        .args(["clean", "--force", "--container"])
        .arg(container.path())
        .assert()
        .code(5)
        .stdout(predicate::str::contains("Cleaned"))
        .stderr(predicate::str::contains("Failed to clean fd:"));

    assert!(!container.path().join("Caches").exists());
    assert!(!container.path().join("tmp").exists());
    assert!(container.path().join("Documents/notes.txt").exists());
}
