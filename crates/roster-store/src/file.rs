// ABOUTME: Lifecycle of the on-disk SQLite file that backs the roster.
// ABOUTME: Recreates the file empty at startup so every run begins without prior data.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while preparing the storage file.
#[derive(Debug, Error)]
pub enum StorageFileError {
    #[error("failed to remove existing database file {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },

    #[error("failed to create database file {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
}

/// The database file the roster writes to.
#[derive(Debug, Clone)]
pub struct StorageFile {
    path: PathBuf,
}

impl StorageFile {
    /// Delete any file at `path` and create a new empty one in its place.
    /// A missing file is not an error; missing parent directories are created.
    pub fn recreate(path: impl Into<PathBuf>) -> Result<Self, StorageFileError> {
        let path = path.into();

        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!("removed previous database file {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(StorageFileError::Remove { path, source }),
        }

        tracing::info!("creating {}...", path.display());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(source) = fs::create_dir_all(parent) {
                return Err(StorageFileError::Create { path, source });
            }
        }

        if let Err(source) = fs::File::create(&path) {
            return Err(StorageFileError::Create { path, source });
        }

        tracing::info!("{} created", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
