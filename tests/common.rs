// tests/common.rs

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

// Helper function to get the binary command; `assert_cmd::Command` can feed stdin.
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn jscleanup_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("jscleanup"))
}

// Writes `content` to `dir/name` and returns the full path.
#[allow(dead_code)]
pub fn create_file(dir: &Path, name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}
