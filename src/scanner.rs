//! One-shot listing of a directory's immediate entries
//!
//! Metadata comes from `DirEntry::metadata`, which does not follow symlinks:
//! a link to a directory is reported as a non-directory with the link's own
//! modification time.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleanupError, Result};

/// Point-in-time view of one directory entry
#[derive(Debug, Clone)]
pub struct EntrySnapshot {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub modified: DateTime<Local>,
}

/// Entry that was listed but whose metadata could not be read
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

/// Result of listing a directory
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Entries sorted by name
    pub entries: Vec<EntrySnapshot>,
    pub skipped: Vec<SkippedEntry>,
}

/// List the immediate entries of `dir`
///
/// Failing to open or iterate the directory is fatal. A single entry whose
/// metadata cannot be read is reported in [`ScanOutcome::skipped`].
pub fn scan_directory(dir: &Path) -> Result<ScanOutcome> {
    let read_failed = |e: std::io::Error| CleanupError::DirectoryReadFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut outcome = ScanOutcome::default();

    for entry in fs::read_dir(dir).map_err(read_failed)? {
        let entry = entry.map_err(read_failed)?;
        let name = entry.file_name().to_string_lossy().into_owned();

        let snapshot = entry.metadata().and_then(|metadata| {
            Ok(EntrySnapshot {
                name: name.clone(),
                path: entry.path(),
                is_dir: metadata.is_dir(),
                modified: DateTime::<Local>::from(metadata.modified()?),
            })
        });

        match snapshot {
            Ok(snapshot) => outcome.entries.push(snapshot),
            Err(e) => outcome.skipped.push(SkippedEntry {
                name,
                reason: e.to_string(),
            }),
        }
    }

    outcome.entries.sort_by(|a, b| a.name.cmp(&b.name));
    outcome.skipped.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(outcome)
}
