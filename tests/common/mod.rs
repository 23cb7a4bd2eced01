// tests/common/mod.rs
//! Test utilities — one temporary notebook per test

use std::path::PathBuf;

use ciphernote::NotebookStore;
use tempfile::TempDir;

/// Password every test notebook is created with.
pub const PASSWORD: &str = "HiJared@2022";

/// A notebook living in its own temp directory; the directory (and the
/// database file with it) is removed when the harness drops.
pub struct TestNotebook {
    pub store: NotebookStore,
    dir: TempDir,
}

impl TestNotebook {
    /// Fresh notebook created with [`PASSWORD`], already unlocked.
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store =
            NotebookStore::create(dir.path().join("notebook.db"), PASSWORD).expect("create notebook");
        Self { store, dir }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("notebook.db")
    }

    /// Drop the open store and hand back the database path, keeping the
    /// temp directory alive so the file can be reopened.
    #[allow(dead_code)] // not every test binary reopens its notebook
    pub fn into_path(self) -> (TempDir, PathBuf) {
        let TestNotebook { store, dir } = self;
        drop(store);
        let path = dir.path().join("notebook.db");
        (dir, path)
    }
}
