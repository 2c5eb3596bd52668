// ABOUTME: SQLite-backed student tables: create a table, insert a student, list students by name.
// ABOUTME: Each operation opens its own connection to the storage file and closes it when done.

use std::path::{Path, PathBuf};
use std::time::Duration;

use roster_core::{Student, TableName};
use rusqlite::{Connection, params};
use thiserror::Error;

/// How long a connection waits on a locked database before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur during student table operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to the roster database file. Holds no open connection; every
/// call connects, runs a single statement, and disconnects.
#[derive(Debug, Clone)]
pub struct StudentStore {
    path: PathBuf,
    busy_timeout: Duration,
}

impl StudentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    /// Create a student table with the fixed four-column schema.
    /// Fails if a table with that name already exists.
    pub fn create_table(&self, table: &TableName) -> Result<(), StoreError> {
        let sql = format!(
            "CREATE TABLE {} (
                idStudent INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                code TEXT,
                name TEXT,
                program TEXT
            )",
            table.quoted()
        );

        tracing::info!("create {} table...", table);
        let conn = self.connect()?;
        conn.execute(&sql, [])?;
        tracing::info!("{} table created", table);
        Ok(())
    }

    /// Insert one student and return its row id.
    pub fn insert_student(&self, table: &TableName, student: &Student) -> Result<i64, StoreError> {
        let sql = format!(
            "INSERT INTO {} (code, name, program) VALUES (?1, ?2, ?3)",
            table.quoted()
        );

        tracing::debug!("inserting student record into {}", table);
        let conn = self.connect()?;
        conn.execute(&sql, params![student.code, student.name, student.program])?;
        Ok(conn.last_insert_rowid())
    }

    /// List every student in the table, ordered by name ascending.
    pub fn list_students(&self, table: &TableName) -> Result<Vec<Student>, StoreError> {
        let sql = format!(
            "SELECT code, name, program FROM {} ORDER BY name",
            table.quoted()
        );

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(Student {
                code: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                program: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?;

        let mut students = Vec::new();
        for row in rows {
            students.push(row?);
        }
        Ok(students)
    }

    /// Number of rows in the table.
    pub fn count_students(&self, table: &TableName) -> Result<u64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.quoted());
        let conn = self.connect()?;
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
