//! Rotation policy and backup-file bookkeeping.
//!
//! An archived backup of `/log/log.log` is named `log-<timestamp>.log`, with
//! the rotation instant embedded in the filename. That embedded timestamp is
//! the single authority for ordering and age pruning, so bookkeeping never
//! depends on filesystem mtimes surviving copies or restores.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local, NaiveDateTime};

/// Filesystem-safe timestamp embedded in backup filenames.
const BACKUP_TIME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";

/// Rotation thresholds for the rotating file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size cap for the active file, in megabytes. Zero disables size-based
    /// rotation.
    pub max_size_mb: u64,
    /// Backups older than this many days are purged on the next rotation.
    /// Zero disables age-based pruning.
    pub max_age_days: u64,
    /// At most this many backups are retained, oldest evicted first. Zero
    /// retains all of them.
    pub max_backups: usize,
}

impl RotationPolicy {
    pub(crate) fn max_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }
}

/// Backup name for `active` rotated at `now`.
pub(crate) fn backup_path(active: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = active
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("log");
    let timestamp = now.format(BACKUP_TIME_FORMAT);
    let name = match active.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{timestamp}.{ext}"),
        None => format!("{stem}-{timestamp}"),
    };
    active.with_file_name(name)
}

/// Extracts the rotation instant from a backup filename, if `candidate` is a
/// backup of `active`.
fn backup_timestamp(active: &Path, candidate: &Path) -> Option<NaiveDateTime> {
    let stem = active.file_stem()?.to_str()?;
    let name = candidate.file_name()?.to_str()?;

    let middle = name.strip_prefix(stem)?.strip_prefix('-')?;
    let middle = match active.extension().and_then(|e| e.to_str()) {
        Some(ext) => middle.strip_suffix(ext)?.strip_suffix('.')?,
        None => middle,
    };
    NaiveDateTime::parse_from_str(middle, BACKUP_TIME_FORMAT).ok()
}

/// Lists backups of `active`, newest first.
fn list_backups(active: &Path) -> io::Result<Vec<(NaiveDateTime, PathBuf)>> {
    let dir = match active.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut backups = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path == active {
            continue;
        }
        if let Some(ts) = backup_timestamp(active, &path) {
            backups.push((ts, path));
        }
    }
    backups.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(backups)
}

/// Applies `max_backups` and `max_age_days` to the backups of `active`.
///
/// Individual removal failures are skipped; a stale backup never blocks the
/// write that triggered the rotation.
pub(crate) fn prune_backups(active: &Path, policy: &RotationPolicy) -> io::Result<()> {
    let backups = list_backups(active)?;

    let mut doomed: Vec<&PathBuf> = Vec::new();
    if policy.max_backups > 0 && backups.len() > policy.max_backups {
        doomed.extend(backups.iter().skip(policy.max_backups).map(|(_, p)| p));
    }
    if policy.max_age_days > 0 {
        let cutoff = Local::now().naive_local() - Duration::days(policy.max_age_days as i64);
        doomed.extend(
            backups
                .iter()
                .filter(|(ts, _)| *ts < cutoff)
                .map(|(_, p)| p),
        );
    }

    doomed.sort();
    doomed.dedup();
    for path in doomed {
        let _ = fs::remove_file(path);
    }
    Ok(())
}
