//! Shared test utilities and fixtures for reader tests

use std::fs;
use std::path::{Path, PathBuf};

pub mod field_parser_tests;

pub const HEADER: &str = "house_address,floor_count,area_residential,population";

/// Write a housing CSV file with the standard header followed by `rows`
pub fn create_test_housing_file(dir: &Path, filename: &str, rows: &[&str]) -> PathBuf {
    let file_path = dir.join(filename);
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&file_path, content).unwrap();
    file_path
}
