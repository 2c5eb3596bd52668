// ABOUTME: Persistence layer for the student roster, backed by a single SQLite file.
// ABOUTME: Provides the storage file lifecycle and per-request student table operations.

pub mod file;
pub mod sqlite;

pub use file::{StorageFile, StorageFileError};
pub use sqlite::{DEFAULT_BUSY_TIMEOUT, StoreError, StudentStore};
