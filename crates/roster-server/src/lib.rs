// ABOUTME: HTTP server for the student roster, providing the createTable/insertStudent/displayStudents API.
// ABOUTME: Uses Axum with shared state holding the student store and the current table name.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, RosterConfig};
pub use error::ApiError;
pub use routes::create_router;
