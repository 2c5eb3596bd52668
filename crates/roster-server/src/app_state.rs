// ABOUTME: Shared application state for the roster HTTP server.
// ABOUTME: Holds the student store and the table most recently created through the API.

use std::sync::Arc;

use roster_core::TableName;
use roster_store::StudentStore;
use tokio::sync::RwLock;

use crate::error::ApiError;

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub store: StudentStore,
    /// Target for inserts and listings that do not name a table.
    /// Set only after a table has been created successfully.
    pub current_table: RwLock<Option<TableName>>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: StudentStore) -> Self {
        Self {
            store,
            current_table: RwLock::new(None),
        }
    }

    /// Validate an explicitly requested table name, or fall back to the current table.
    pub async fn resolve_table(&self, requested: Option<&str>) -> Result<TableName, ApiError> {
        match requested {
            Some(raw) => Ok(TableName::parse(raw)?),
            None => self
                .current_table
                .read()
                .await
                .clone()
                .ok_or(ApiError::NoTableSelected),
        }
    }

    pub async fn set_current_table(&self, table: TableName) {
        *self.current_table.write().await = Some(table);
    }
}
