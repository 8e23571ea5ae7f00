#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

pub const TEST_DATA_PATH: &str = "tests/testdata";

pub fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(TEST_DATA_PATH)
        .join(format!("{}.csv", name))
}

pub fn create_test_csv(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

pub fn fixed_entry_time() -> DateTime<Utc> {
    "2024-01-15T10:30:00Z".parse().unwrap()
}
