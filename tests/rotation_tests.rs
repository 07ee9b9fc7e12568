use std::fs;
use std::path::Path;

use applog::{build_rotating, field, Level, LogOptions};
use tempfile::TempDir;

fn rotating_options(dir: &TempDir, max_backups: usize, max_age_days: u64) -> LogOptions {
    LogOptions {
        development: false,
        level: Level::Debug,
        app_name: "app".to_string(),
        log_file: Some(dir.path().join("log.log")),
        err_log_file: Some(dir.path().join("error.log")),
        max_size_mb: 1,
        max_age_days,
        max_backups,
    }
}

/// A record whose payload field pushes the encoded line to roughly 300 KB.
fn bulky_payload() -> String {
    "x".repeat(300 * 1024)
}

fn backups_in(dir: &Path, active: &Path) -> Vec<fs::DirEntry> {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|e| {
            let p = e.path();
            p != active && p.file_name() != Some("error.log".as_ref())
        })
        .collect()
}

#[test]
fn exceeding_the_size_cap_archives_the_active_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = rotating_options(&dir, 3, 0);
    let logger = build_rotating(&opts).expect("rotating strategy should build");
    let active = opts.log_file.clone().unwrap();

    let payload = bulky_payload();
    // Four ~300 KB records: the fourth write crosses 1 MB and rotates.
    for i in 0..4 {
        logger.info("bulk", &[field("i", i), field("payload", &payload)]);
    }
    logger.sync().unwrap();

    let backups = backups_in(dir.path(), &active);
    assert_eq!(backups.len(), 1, "expected exactly one archived backup");

    // The fresh active file holds only the record that triggered rotation.
    let active_len = fs::metadata(&active).unwrap().len();
    assert!(
        active_len < 400 * 1024,
        "active file should have restarted, holds {active_len} bytes"
    );

    let backup_len = fs::metadata(backups[0].path()).unwrap().len();
    assert!(
        backup_len > 800 * 1024,
        "backup should hold the full pre-rotation file, holds {backup_len} bytes"
    );
}

#[test]
fn backup_count_never_exceeds_max_backups() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = rotating_options(&dir, 2, 0);
    let logger = build_rotating(&opts).expect("rotating strategy should build");
    let active = opts.log_file.clone().unwrap();

    let payload = bulky_payload();
    for i in 0..16 {
        logger.info("bulk", &[field("i", i), field("payload", &payload)]);
    }
    logger.sync().unwrap();

    let backups = backups_in(dir.path(), &active);
    assert!(
        backups.len() <= 2,
        "expected at most 2 backups, found {}",
        backups.len()
    );
    assert!(active.exists(), "active file should always exist");
}

#[test]
fn stale_backups_are_purged_on_the_next_rotation() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = rotating_options(&dir, 0, 30);
    let active = opts.log_file.clone().unwrap();

    // Plant a backup whose embedded timestamp is far past the age limit.
    let stale = dir.path().join("log-2020-01-01T00-00-00.000.log");
    fs::write(&stale, b"ancient").unwrap();

    let logger = build_rotating(&opts).expect("rotating strategy should build");
    let payload = bulky_payload();
    for i in 0..4 {
        logger.info("bulk", &[field("i", i), field("payload", &payload)]);
    }
    logger.sync().unwrap();

    assert!(!stale.exists(), "stale backup should be purged after rotation");
    let survivors = backups_in(dir.path(), &active);
    assert!(!survivors.is_empty(), "recent backups should survive");
}
