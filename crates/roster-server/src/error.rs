// ABOUTME: Error type returned by roster HTTP handlers and its mapping to status codes.
// ABOUTME: Storage and decode failures become 500s, bad table names become 400s; nothing terminates the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::TableNameError;
use roster_store::StoreError;
use thiserror::Error;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidTableName(#[from] TableNameError),

    #[error("no table selected; call /createTable/ first")]
    NoTableSelected,

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidTableName(_) | ApiError::NoTableSelected => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) | ApiError::Store(_) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
