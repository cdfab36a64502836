//! Test utilities and fixtures for Mauka Match.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// A temporary directory holding configuration files for one test.
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    /// Creates an empty fixture directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: create_test_dir()?,
        })
    }

    /// Writes `contents` to `name` inside the fixture and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Path of `name` inside the fixture, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
