//! Run configuration

use std::path::PathBuf;

/// Validated options for a single cleanup run
///
/// `dir` is never empty. `days` is not range-checked: zero or negative values
/// move the cutoff to now or into the future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    /// Directory whose immediate entries are examined
    pub dir: PathBuf,
    /// Age threshold in calendar days
    pub days: i64,
    /// Report candidates without deleting them
    pub dry_run: bool,
    /// Append-only log destination; `None` writes to stdout
    pub log_file: Option<PathBuf>,
}
