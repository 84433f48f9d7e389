//! [`ConfigDir`] fixture for directive-file test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding directive and schema files.
///
/// # Example
///
/// ```rust
/// use optfile_test_utils::ConfigDir;
///
/// let dir = ConfigDir::new();
/// let path = dir.write("app.conf", "UDPPort 53\n");
/// assert!(path.exists());
/// ```
pub struct ConfigDir {
    temp_dir: TempDir,
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("ConfigDir::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `name` inside the directory, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name` and return its full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ConfigDir::write: {}: {}", path.display(), e));
        path
    }

    /// Write a directive file from individual lines, newline-terminated.
    pub fn write_lines(&self, name: &str, lines: &[&str]) -> PathBuf {
        let mut content = lines.join("\n");
        content.push('\n');
        self.write(name, &content)
    }
}
