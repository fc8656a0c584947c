//! [`GoldDir`] fixture for gold-file tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary results directory holding gold files.
///
/// # Example
///
/// ```rust,no_run
/// use harness_test_utils::gold::GoldDir;
///
/// let dir = GoldDir::new();
/// dir.write("results.json", r#"{"a": 1}"#);
/// dir.assert_gold_eq("results.json", r#"{"a": 1}"#);
/// ```
pub struct GoldDir {
    temp_dir: TempDir,
}

impl Default for GoldDir {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the gold file `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write a gold file and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("GoldDir::write: failed to write {}: {e}", path.display()));
        path
    }

    /// Assert that the gold file `name` exists and holds exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or differs from `content`.
    pub fn assert_gold_eq(&self, name: &str, content: &str) {
        let path = self.path(name);
        let actual = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read gold file: {}", path.display()));
        assert_eq!(actual, content, "Gold file {} has unexpected content", path.display());
    }

    /// Assert that the gold file `name` does **not** exist.
    pub fn assert_gold_missing(&self, name: &str) {
        let path = self.path(name);
        assert!(!path.exists(), "Expected gold file NOT to exist: {}", path.display());
    }
}
