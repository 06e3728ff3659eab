//! Temporary data directories
//!
//! Each [`DataDir`] owns a fresh directory that is removed on drop, so file
//! round-trip tests never see each other's records.

use std::fs;
use std::path::{Path, PathBuf};

use infra_store::{FlatFileStore, StorageConfig};
use tempfile::TempDir;

/// A temporary directory holding the three record files
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    /// Creates an empty data directory
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("cannot create temp dir: {e}"));
        Self { dir }
    }

    /// Directory path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Storage configuration pointing into the directory
    pub fn config(&self) -> StorageConfig {
        StorageConfig::in_dir(self.dir.path())
    }

    /// A flat-file store over the directory
    pub fn store(&self) -> FlatFileStore {
        FlatFileStore::new(self.config())
    }

    /// Writes `contents` to the file `name`
    pub fn write(&self, name: &str, contents: &str) {
        let path = self.file(name);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    }

    /// Reads the file `name`
    pub fn read(&self, name: &str) -> String {
        let path = self.file(name);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}
