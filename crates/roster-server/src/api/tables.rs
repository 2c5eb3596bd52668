// ABOUTME: Table creation handler for the roster API.
// ABOUTME: Validates the requested name, creates the table, then makes it the current table.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use roster_core::TableInfo;

use crate::app_state::SharedState;
use crate::error::ApiError;

/// POST /createTable/ - Create a student table and select it for later requests.
pub async fn create_table(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let info: TableInfo = serde_json::from_slice(&body)?;
    let table = info.table_name()?;

    let store = state.store.clone();
    let created = table.clone();
    tokio::task::spawn_blocking(move || store.create_table(&created)).await??;

    state.set_current_table(table).await;
    Ok(StatusCode::OK)
}
