//! Error types and handling for cleanup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cleanup runs
#[derive(Error, Diagnostic, Debug)]
pub enum CleanupError {
    // Configuration errors
    #[error("--dir argument is required")]
    #[diagnostic(
        code(cleanup::config::missing_dir),
        help("Pass the directory to clean with --dir=<DIR>")
    )]
    MissingDirectory,

    #[error("Cutoff for {days} days is outside the supported date range")]
    #[diagnostic(
        code(cleanup::config::cutoff_out_of_range),
        help("Use a smaller --days value")
    )]
    CutoffOutOfRange { days: i64 },

    // Log sink errors
    #[error("Error opening log file {path}: {reason}")]
    #[diagnostic(
        code(cleanup::log::open_failed),
        help("Check that the parent directory exists and is writable")
    )]
    LogFileOpenFailed { path: String, reason: String },

    #[error("Failed to write log entry: {reason}")]
    #[diagnostic(
        code(cleanup::log::write_failed),
        help("Later log lines may be missing; the cleanup itself carried on")
    )]
    LogWriteFailed { reason: String },

    // Directory errors
    #[error("Error reading directory {path}: {reason}")]
    #[diagnostic(
        code(cleanup::fs::read_dir_failed),
        help("Check that the directory exists and is readable")
    )]
    DirectoryReadFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CleanupError>;
