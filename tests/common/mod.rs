//! Common test utilities for cleanup integration tests

use assert_cmd::Command;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A scratch directory holding files of known ages
pub struct TestDir {
    /// Temporary directory, removed on drop
    temp: TempDir,
}

impl TestDir {
    /// Create a new empty test directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    /// Path to the directory root
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file whose modification time is `days_old` days in the past
    pub fn aged_file(&self, name: &str, days_old: u64) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, name).expect("Failed to write file");
        File::options()
            .write(true)
            .open(&path)
            .expect("Failed to open file")
            .set_modified(SystemTime::now() - Duration::from_secs(days_old * SECONDS_PER_DAY))
            .expect("Failed to set modification time");
        path
    }

    /// Create a subdirectory whose modification time is `days_old` days in the past
    pub fn aged_dir(&self, name: &str, days_old: u64) -> PathBuf {
        let path = self.path().join(name);
        std::fs::create_dir(&path).expect("Failed to create directory");
        File::open(&path)
            .expect("Failed to open directory")
            .set_modified(SystemTime::now() - Duration::from_secs(days_old * SECONDS_PER_DAY))
            .expect("Failed to set modification time");
        path
    }

    /// Check if an entry exists in the directory
    pub fn exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// Sorted names of the directory's immediate entries
    pub fn names(&self) -> Vec<String> {
        list_names(self.path())
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted names of the immediate entries of `dir`
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to list directory")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// The real cleanup binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn cleanup_cmd() -> Command {
    Command::cargo_bin("cleanup").expect("Failed to find cleanup binary")
}

/// Strip the `<timestamp> - ` prefix from each log line
#[allow(dead_code)]
pub fn log_messages(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_once(" - ").map(|(_, msg)| msg.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aged_file_is_old() {
        let dir = TestDir::new();
        let path = dir.aged_file("old.txt", 10);
        let modified = std::fs::metadata(path).unwrap().modified().unwrap();
        let age = SystemTime::now().duration_since(modified).unwrap();
        assert!(age >= Duration::from_secs(10 * SECONDS_PER_DAY));
    }

    #[test]
    fn test_log_messages_strips_timestamp() {
        let messages = log_messages("2024-01-01 10:00:00 - Deleted: a.txt\n");
        assert_eq!(messages, vec!["Deleted: a.txt"]);
    }
}
