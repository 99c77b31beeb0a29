//! [`TransferFixture`] builder for transport test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use transport_core::Repository;

/// A temporary repository tree with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use transport_test_utils::TransferFixture;
///
/// let fixture = TransferFixture::new();
/// fixture.write_file("group/artifact-1.0.jar", "bytes");
/// let repo = fixture.repository();
/// fixture.assert_file_exists("group/artifact-1.0.jar");
/// ```
pub struct TransferFixture {
    temp_dir: TempDir,
}

impl Default for TransferFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferFixture {
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

    /// The root as a string, in the form a base directory is configured.
    pub fn base_dir(&self) -> String {
        self.root().to_string_lossy().into_owned()
    }

    /// A [`Repository`] rooted at this fixture.
    pub fn repository(&self) -> Repository {
        Repository::new(self.base_dir())
    }

    /// Absolute path for a slash-separated relative name.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Create the directory `relative`, including missing ancestors.
    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).unwrap();
    }

    /// Read `relative` back as a string.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file cannot be read.
    pub fn read_file(&self, relative: &str) -> String {
        let full_path = self.path(relative);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `relative` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read_file(relative);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path(relative).display(),
            content,
            file_content
        );
    }
}
