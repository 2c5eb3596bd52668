// ABOUTME: API module containing the HTTP handler functions for the roster.
// ABOUTME: Split into table creation and student insert/listing handlers.

pub mod students;
pub mod tables;
