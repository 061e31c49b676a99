//! Cleanup - file age pruning for scheduled maintenance
//!
//! Deletes files in a directory whose modification time is older than a given
//! number of days, logging every decision to a file or standard output.

use clap::Parser;
use std::process::ExitCode;

mod cleanup;
mod cli;
mod commands;
mod config;
mod cutoff;
mod error;
mod logger;
mod scanner;

use cli::Cli;
use error::CleanupError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e @ CleanupError::MissingDirectory) => {
            eprintln!("Error: {}\n", e);
            eprint!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match commands::cleanup::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        // Already written to stdout by the logger
        Err(CleanupError::DirectoryReadFailed { .. }) if config.log_file.is_none() => {
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
