#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A fuzzy entry whose msgctxt shifted by two lines (within default threshold).
pub const SMALL_SHIFT_ENTRY: &str = "#, fuzzy\n\
    #| msgctxt \"a.lua:10-3\"\n\
    msgctxt \"a.lua:12-3\"\n\
    msgid \"Hello\"\n\
    msgstr \"Hallo\"\n";

/// A fuzzy entry whose msgctxt shifted by forty lines (beyond default threshold).
pub const LARGE_SHIFT_ENTRY: &str = "#, fuzzy\n\
    #| msgctxt \"a.lua:10-3\"\n\
    msgctxt \"a.lua:50-3\"\n\
    msgid \"Goodbye\"\n\
    msgstr \"Doei\"\n";

/// Creates a temporary directory with catalog fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a catalog file with the given content in the temp directory.
    pub fn create_po(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file back from the temp directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}
