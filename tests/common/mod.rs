// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty target directory plus a separate directory for logs
pub fn create_workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("target");
    fs::create_dir(&target).unwrap();
    let log_path = dir.path().join("run.log");
    (dir, target, log_path)
}

/// Write a file of `len` bytes, creating parent directories
pub fn write_file(root: &Path, rel: &str, len: usize) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; len]).unwrap();
}

/// Parse text report lines into (name, size) pairs sorted by name
pub fn parse_report(out: &[u8]) -> Vec<(String, String)> {
    let text = String::from_utf8(out.to_vec()).unwrap();
    let mut rows: Vec<_> = text
        .lines()
        .map(|line| {
            let (name, size) = line.split_once(" Size: ").unwrap();
            (name.trim_end().to_string(), size.trim_end().to_string())
        })
        .collect();
    rows.sort();
    rows
}

pub fn read_log(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
