//! Test utilities for writing tree documents to temporary files.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The example tree used across tests: a hidden file, a file and an empty
/// directory directly under the root.
pub const SAMPLE_TREE: &str = r#"{
    "name": "root",
    "permissions": "drwxr-xr-x",
    "size": 4096,
    "time_modified": 500,
    "contents": [
        {"name": ".hidden", "permissions": "-rw-------", "size": 10, "time_modified": 3000},
        {"name": "a.txt", "permissions": "-rw-r--r--", "size": 2048, "time_modified": 1000},
        {"name": "b", "permissions": "drwxr-xr-x", "size": 4096, "time_modified": 2000, "contents": []}
    ]
}"#;

/// A temporary directory holding tree documents.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// A directory already containing `tree.json` with [`SAMPLE_TREE`].
    pub fn with_sample() -> Self {
        let tree = Self::new();
        tree.add_document("tree.json", SAMPLE_TREE);
        tree
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a document into the directory and return its full path.
    pub fn add_document(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        fs::write(&full_path, content).expect("Failed to write document");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
