//! Cleanup command implementation

use chrono::Local;

use crate::cleanup::{CleanupSummary, clean_directory};
use crate::config::CleanupConfig;
use crate::error::Result;
use crate::logger::Logger;

/// Run one cleanup pass
///
/// The log sink lives for the duration of this call and is closed before it
/// returns, whatever the outcome.
pub fn run(config: &CleanupConfig) -> Result<CleanupSummary> {
    let mut logger = Logger::open(config.log_file.as_deref())?;
    clean_directory(config, Local::now(), &mut logger)
}
