//! Tests for the file-system adapter

pub mod reader_writer_tests;

use std::fs;
use std::path::Path;

/// Write a small CSV file for a test
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
