//! Local directory scanner using std::fs.

use std::io;
use std::path::Path;

use tracing::{instrument, warn};

use layup_core::{
    application::{ApplicationError, ports::SourceScanner},
    domain::SourceFile,
    error::{LayupError, LayupResult},
};

/// Production scanner implementation using `std::fs::read_dir`.
#[derive(Debug, Clone, Copy)]
pub struct LocalScanner;

impl LocalScanner {
    /// Create a new local scanner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceScanner for LocalScanner {
    /// List the plain files directly inside `dir`.
    ///
    /// Subdirectories are never descended into. Entries whose names are not
    /// valid UTF-8 are **skipped with a `WARN` log** rather than failing the
    /// whole scan. Order is whatever the filesystem yields.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn list_files(&self, dir: &Path) -> LayupResult<Vec<SourceFile>> {
        if !dir.is_dir() {
            return Err(ApplicationError::SourceDirNotFound {
                path: dir.to_path_buf(),
            }
            .into());
        }

        let read_dir = std::fs::read_dir(dir).map_err(|e| map_scan_error(dir, e))?;

        let mut files = Vec::new();
        for entry_result in read_dir {
            let entry = entry_result.map_err(|e| map_scan_error(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match SourceFile::new(path) {
                Ok(file) => files.push(file),
                Err(e) => {
                    // One unreadable name must not block all others
                    warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "skipping entry with unusable file name"
                    );
                }
            }
        }

        Ok(files)
    }
}

fn map_scan_error(dir: &Path, e: io::Error) -> LayupError {
    ApplicationError::ScanFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
