//! In-memory scanner adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use layup_core::{
    application::{ApplicationError, ports::SourceScanner},
    domain::SourceFile,
    error::LayupResult,
};

/// In-memory scanner for testing.
///
/// Directories are registered up front; `list_files` yields their entries
/// in insertion order, which makes discovery-order assertions stable.
#[derive(Debug, Clone)]
pub struct MemoryScanner {
    inner: Arc<RwLock<HashMap<PathBuf, Vec<String>>>>,
}

impl MemoryScanner {
    /// Create a new empty scanner.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a directory with the given file names (builder style).
    pub fn with_dir(self, dir: impl Into<PathBuf>, names: &[&str]) -> Self {
        self.add_dir(dir, names);
        self
    }

    /// Register a directory with the given file names.
    pub fn add_dir(&self, dir: impl Into<PathBuf>, names: &[&str]) {
        let mut inner = self.inner.write().unwrap();
        inner.insert(
            dir.into(),
            names.iter().map(|n| (*n).to_owned()).collect(),
        );
    }
}

impl Default for MemoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceScanner for MemoryScanner {
    fn list_files(&self, dir: &Path) -> LayupResult<Vec<SourceFile>> {
        let inner = self.inner.read().map_err(|_| {
            ApplicationError::ScanFailed {
                path: dir.to_path_buf(),
                reason: "scanner state unavailable".into(),
            }
        })?;

        let names = inner.get(dir).ok_or_else(|| {
            ApplicationError::SourceDirNotFound {
                path: dir.to_path_buf(),
            }
        })?;

        names
            .iter()
            .map(|name| SourceFile::new(dir.join(name)).map_err(Into::into))
            .collect()
    }
}
