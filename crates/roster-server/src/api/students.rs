// ABOUTME: Student insert and listing handlers for the roster API.
// ABOUTME: Both target the table named in the request, or the current table when none is named.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use roster_core::{STUDENT_FIELDS, Student, decode_string_fields};
use serde::{Deserialize, Deserializer};

use crate::app_state::SharedState;
use crate::error::ApiError;

/// Request body for inserting a student. `tableName` is optional.
#[derive(Debug)]
pub struct InsertStudentRequest {
    pub student: Student,
    pub table_name: Option<String>,
}

impl<'de> Deserialize<'de> for InsertStudentRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [code, name, program, table_name] = decode_string_fields(
            deserializer,
            [STUDENT_FIELDS[0], STUDENT_FIELDS[1], STUDENT_FIELDS[2], "tableName"],
        )?;
        Ok(Self {
            student: Student::from_fields([code, name, program]),
            table_name,
        })
    }
}

/// Query string for listing students; keys match like the JSON bodies do.
#[derive(Debug, Default)]
pub struct DisplayStudentsQuery {
    pub table_name: Option<String>,
}

impl<'de> Deserialize<'de> for DisplayStudentsQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [table_name] = decode_string_fields(deserializer, ["tableName"])?;
        Ok(Self { table_name })
    }
}

/// POST /insertStudent/ - Insert one student row.
pub async fn insert_student(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let req: InsertStudentRequest = serde_json::from_slice(&body)?;
    let table = state.resolve_table(req.table_name.as_deref()).await?;

    let store = state.store.clone();
    let student = req.student;
    let id = tokio::task::spawn_blocking(move || store.insert_student(&table, &student)).await??;

    tracing::debug!("inserted student row {}", id);
    Ok(StatusCode::OK)
}

/// GET /displayStudents/ - List every student, ordered by name.
pub async fn display_students(
    State(state): State<SharedState>,
    Query(query): Query<DisplayStudentsQuery>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let table = state.resolve_table(query.table_name.as_deref()).await?;

    let store = state.store.clone();
    let students = tokio::task::spawn_blocking(move || store.list_students(&table)).await??;

    Ok(Json(students))
}
