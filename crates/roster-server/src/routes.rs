// ABOUTME: Route definitions for the roster HTTP API.
// ABOUTME: Maps the three student routes, their subpaths, and a health check onto one Router.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{MethodRouter, get, post};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/createTable", create_table())
        .route("/createTable/", create_table())
        .route("/createTable/{*rest}", create_table())
        .route("/insertStudent", insert_student())
        .route("/insertStudent/", insert_student())
        .route("/insertStudent/{*rest}", insert_student())
        .route("/displayStudents", display_students())
        .route("/displayStudents/", display_students())
        .route("/displayStudents/{*rest}", display_students())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// Any method a student route does not serve.
async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Invalid request method")
}

fn create_table() -> MethodRouter<SharedState> {
    post(api::tables::create_table).fallback(method_not_allowed)
}

fn insert_student() -> MethodRouter<SharedState> {
    post(api::students::insert_student).fallback(method_not_allowed)
}

fn display_students() -> MethodRouter<SharedState> {
    // GET routes answer HEAD implicitly; this one serves GET only.
    get(api::students::display_students)
        .head(method_not_allowed)
        .fallback(method_not_allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use axum::body::Body;
    use http::Request;
    use roster_core::{Student, TableName};
    use roster_store::{StorageFile, StudentStore};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_state() -> (TempDir, SharedState) {
        let dir = TempDir::new().unwrap();
        let file = StorageFile::recreate(dir.path().join("roster.db")).unwrap();
        let state = Arc::new(AppState::new(StudentStore::new(file.path())));
        (dir, state)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn send(state: &SharedState, req: Request<Body>) -> axum::response::Response {
        create_router(Arc::clone(state)).oneshot(req).await.unwrap()
    }

    async fn body_text(resp: axum::response::Response) -> String {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn display(state: &SharedState, uri: &str) -> Vec<Student> {
        let resp = send(state, Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        serde_json::from_str(&body_text(resp).await).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (_dir, state) = test_state();
        let resp = send(&state, Request::get("/health").body(Body::empty()).unwrap()).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn create_table_then_display_is_empty() {
        let (_dir, state) = test_state();

        let resp = send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "T" })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.is_empty());

        assert!(display(&state, "/displayStudents/").await.is_empty());
        assert_eq!(
            state.current_table.read().await.as_ref().map(TableName::as_str),
            Some("T")
        );
    }

    #[tokio::test]
    async fn inserted_students_are_listed_by_name() {
        let (_dir, state) = test_state();
        send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "Students" })),
        )
        .await;

        for body in [
            serde_json::json!({ "code": "C1", "name": "Bob", "program": "CS" }),
            serde_json::json!({ "code": "C2", "name": "Alice", "program": "EE" }),
        ] {
            let resp = send(&state, post_json("/insertStudent/", body)).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        assert_eq!(
            display(&state, "/displayStudents/").await,
            vec![
                Student::new("C2", "Alice", "EE"),
                Student::new("C1", "Bob", "CS"),
            ]
        );
    }

    #[tokio::test]
    async fn wrong_methods_return_405() {
        let (_dir, state) = test_state();

        let resp = send(&state, Request::get("/createTable/").body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(resp).await, "Invalid request method");

        let resp = send(&state, Request::get("/insertStudent/").body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let resp = send(
            &state,
            Request::post("/displayStudents/").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let resp = send(
            &state,
            Request::head("/displayStudents/").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn subpaths_reach_the_same_handlers() {
        let (_dir, state) = test_state();

        let resp = send(&state, Request::get("/createTable/x").body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let resp = send(
            &state,
            post_json("/createTable/extra/path", serde_json::json!({ "tableName": "T" })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(
            &state,
            post_json(
                "/insertStudent/x",
                serde_json::json!({ "code": "C1", "name": "Bob", "program": "CS" }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(
            display(&state, "/displayStudents/anything").await,
            vec![Student::new("C1", "Bob", "CS")]
        );
    }

    #[tokio::test]
    async fn partial_and_oddly_cased_bodies_are_accepted() {
        let (_dir, state) = test_state();
        send(
            &state,
            post_json("/createTable/", serde_json::json!({ "TABLENAME": "Students" })),
        )
        .await;

        let resp = send(
            &state,
            post_json("/insertStudent/", serde_json::json!({ "code": "C1", "name": "Bob" })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(
            &state,
            post_json(
                "/insertStudent/",
                serde_json::json!({ "CODE": "C2", "NAME": "Alice", "PROGRAM": "EE" }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(
            display(&state, "/displayStudents/?TableName=Students").await,
            vec![
                Student::new("C2", "Alice", "EE"),
                Student::new("C1", "Bob", ""),
            ]
        );
    }

    #[tokio::test]
    async fn malformed_insert_returns_500_and_inserts_nothing() {
        let (_dir, state) = test_state();
        send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "Students" })),
        )
        .await;

        let resp = send(
            &state,
            Request::post("/insertStudent/")
                .header("content-type", "application/json")
                .body(Body::from("{\"code\": \"C1\", "))
                .unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_text(resp).await.is_empty());

        let table = TableName::parse("Students").unwrap();
        assert_eq!(state.store.count_students(&table).unwrap(), 0);
    }

    #[tokio::test]
    async fn injection_in_table_name_is_rejected() {
        let (_dir, state) = test_state();

        let resp = send(
            &state,
            post_json(
                "/createTable/",
                serde_json::json!({ "tableName": "Students; DROP TABLE x" }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(state.current_table.read().await.is_none());
    }

    #[tokio::test]
    async fn insert_before_create_is_rejected() {
        let (_dir, state) = test_state();

        let resp = send(
            &state,
            post_json(
                "/insertStudent/",
                serde_json::json!({ "code": "C1", "name": "Bob", "program": "CS" }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(resp).await.contains("no table selected"));

        let resp = send(
            &state,
            Request::get("/displayStudents/").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn duplicate_create_fails_and_keeps_current_table() {
        let (_dir, state) = test_state();
        send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "First" })),
        )
        .await;
        send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "Second" })),
        )
        .await;

        let resp = send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "First" })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(resp).await.contains("already exists"));
        assert_eq!(
            state.current_table.read().await.as_ref().map(TableName::as_str),
            Some("Second")
        );
    }

    #[tokio::test]
    async fn explicit_table_name_overrides_current_table() {
        let (_dir, state) = test_state();
        send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "Archive" })),
        )
        .await;
        send(
            &state,
            post_json("/createTable/", serde_json::json!({ "tableName": "Current" })),
        )
        .await;

        let resp = send(
            &state,
            post_json(
                "/insertStudent/",
                serde_json::json!({
                    "code": "C9",
                    "name": "Zed",
                    "program": "MA",
                    "tableName": "Archive"
                }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert!(display(&state, "/displayStudents/").await.is_empty());
        assert_eq!(
            display(&state, "/displayStudents/?tableName=Archive").await,
            vec![Student::new("C9", "Zed", "MA")]
        );
    }

    #[tokio::test]
    async fn routes_without_trailing_slash_and_capitalized_fields() {
        let (_dir, state) = test_state();

        let resp = send(
            &state,
            post_json("/createTable", serde_json::json!({ "TableName": "T" })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(
            &state,
            post_json(
                "/insertStudent",
                serde_json::json!({ "Code": "C1", "Name": "Bob", "Program": "CS" }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(
            display(&state, "/displayStudents").await,
            vec![Student::new("C1", "Bob", "CS")]
        );
    }
}
