//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::CleanupConfig;
use crate::error::{CleanupError, Result};

/// File cleanup utility
///
/// Delete files older than a given number of days from a directory.
#[derive(Parser, Debug)]
#[command(
    name = "cleanup",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Delete files older than a given number of days from a directory",
    long_about = "Deletes regular files in a directory whose modification time is older than \
                  the given number of days. Subdirectories are never entered or removed. \
                  Every decision is written to an append-only log (or standard output).",
    after_help = "Examples:\n    \
                  cleanup --dir=/tmp --days=30\n    \
                  cleanup --dir=/var/log --days=7 --log=/var/log/cleanup.log\n    \
                  cleanup --dir=/backups --days=90 --dry-run"
)]
pub struct Cli {
    /// Directory path to clean (required)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Delete files older than this many days
    #[arg(
        long,
        value_name = "DAYS",
        default_value_t = 7,
        allow_negative_numbers = true
    )]
    pub days: i64,

    /// Simulate cleanup without actually deleting files
    #[arg(long)]
    pub dry_run: bool,

    /// Path to log file (default: stdout)
    #[arg(long, value_name = "FILE")]
    pub log: Option<String>,
}

impl Cli {
    /// Validate the parsed options into a run configuration
    pub fn into_config(self) -> Result<CleanupConfig> {
        // Plain strings so that `--dir=` reaches validation instead of clap's empty-value error
        let dir = match self.dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => return Err(CleanupError::MissingDirectory),
        };

        // An empty --log= means stdout, same as leaving it out
        let log_file = self.log.filter(|path| !path.is_empty()).map(PathBuf::from);

        Ok(CleanupConfig {
            dir,
            days: self.days,
            dry_run: self.dry_run,
            log_file,
        })
    }
}

/// Render the full help text, as printed by `--help`
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
