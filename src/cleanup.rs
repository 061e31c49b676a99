//! Age-based cleanup of a single directory
//!
//! A run lists the directory once, then walks the snapshot in name order.
//! Files strictly older than the cutoff are candidates; candidates are deleted
//! unless the run is a dry run. Subdirectories are never touched. A failed
//! deletion is logged and the run moves on to the next entry.

use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;

use crate::config::CleanupConfig;
use crate::cutoff::cutoff_time;
use crate::error::Result;
use crate::logger::Logger;
use crate::scanner::{EntrySnapshot, scan_directory};

/// Format for instants quoted inside log messages
const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Counts gathered during one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Files older than the cutoff
    pub candidates: usize,
    /// Candidates actually removed
    pub deleted: usize,
    /// Candidates whose removal failed
    pub failed: usize,
    /// Entries whose metadata could not be read
    pub skipped: usize,
    pub dry_run: bool,
}

/// Run a full cleanup of `config.dir` relative to `now`
pub fn clean_directory<W: Write>(
    config: &CleanupConfig,
    now: DateTime<Local>,
    logger: &mut Logger<W>,
) -> Result<CleanupSummary> {
    let cutoff = cutoff_time(now, config.days)?;

    logger.log(format!(
        "Starting cleanup in {} for files older than {} days ({})",
        config.dir.display(),
        config.days,
        cutoff.format(INSTANT_FORMAT)
    ));
    if config.dry_run {
        logger.log("DRY RUN MODE - no files will actually be deleted");
    }

    let outcome = match scan_directory(&config.dir) {
        Ok(outcome) => outcome,
        Err(e) => {
            logger.log(e.to_string());
            return Err(e);
        }
    };

    for skipped in &outcome.skipped {
        logger.log(format!("Skipping {}: {}", skipped.name, skipped.reason));
    }

    let mut summary = process_entries(&outcome.entries, cutoff, config.dry_run, logger);
    summary.skipped = outcome.skipped.len();

    logger.log(format!(
        "Cleanup complete. {} files deleted (dry-run: {})",
        summary.deleted, summary.dry_run
    ));

    Ok(summary)
}

/// Apply the age rule to an already-taken snapshot
///
/// Entries are not re-checked before deletion; a file changed or removed since
/// the snapshot surfaces as an ordinary deletion failure.
pub fn process_entries<W: Write>(
    entries: &[EntrySnapshot],
    cutoff: DateTime<Local>,
    dry_run: bool,
    logger: &mut Logger<W>,
) -> CleanupSummary {
    let mut summary = CleanupSummary {
        dry_run,
        ..CleanupSummary::default()
    };

    for entry in entries {
        if entry.is_dir || entry.modified >= cutoff {
            continue;
        }

        summary.candidates += 1;
        logger.log(format!(
            "Found candidate: {} (modified: {})",
            entry.name,
            entry.modified.format(INSTANT_FORMAT)
        ));

        if dry_run {
            continue;
        }

        match fs::remove_file(&entry.path) {
            Ok(()) => {
                logger.log(format!("Deleted: {}", entry.name));
                summary.deleted += 1;
            }
            Err(e) => {
                logger.log(format!(
                    "Failed to delete {}: {}",
                    entry.path.display(),
                    e
                ));
                summary.failed += 1;
            }
        }
    }

    summary
}
