// ABOUTME: Blog CRUD API handlers for creating, listing, reading, and deleting blog records.
// ABOUTME: Each handler takes a request-scoped store guard and maps store results to HTTP responses.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::app_state::SharedState;

/// Request body for creating a new blog. Both fields are required;
/// the Json extractor rejects anything else with 422 before we run.
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub body: String,
}

/// POST /blog - Create a new blog record.
pub async fn create_blog(
    State(state): State<SharedState>,
    Json(req): Json<CreateBlogRequest>,
) -> impl IntoResponse {
    let store = state.store().await;

    match store.create(&req.title, &req.body) {
        Ok(blog) => (StatusCode::CREATED, Json(blog)).into_response(),
        Err(e) => {
            tracing::error!("failed to create blog: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to create blog" })),
            )
                .into_response()
        }
    }
}

/// GET /blog - List all blog records.
pub async fn list_blogs(State(state): State<SharedState>) -> impl IntoResponse {
    let store = state.store().await;

    match store.list() {
        Ok(blogs) => Json(blogs).into_response(),
        Err(e) => {
            tracing::error!("failed to list blogs: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to list blogs" })),
            )
                .into_response()
        }
    }
}

/// GET /blog/{id} - Get a single blog record by id.
pub async fn get_blog(State(state): State<SharedState>, Path(id): Path<i64>) -> impl IntoResponse {
    let store = state.store().await;

    match store.get(id) {
        Ok(Some(blog)) => Json(blog).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": format!("Blog with id {} not found", id) })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to get blog {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to get blog" })),
            )
                .into_response()
        }
    }
}

/// DELETE /blog/{id} - Delete a blog record by id.
/// A missing id still returns 204; the response never reports whether
/// anything matched.
pub async fn delete_blog(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let store = state.store().await;

    match store.delete(id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("failed to delete blog {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to delete blog" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::routes::create_router;
    use axum::body::Body;
    use blogd_store::BlogStore;
    use http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        let dir = tempfile::TempDir::new().unwrap();
        let store = BlogStore::open(&dir.keep().join("blog.db")).unwrap();
        Arc::new(AppState::new(store))
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn post_blog(state: &SharedState, title: &str, body: &str) -> serde_json::Value {
        let app = create_router(Arc::clone(state));
        let payload = serde_json::json!({ "title": title, "body": body });

        let resp = app
            .oneshot(
                Request::post("/blog")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        json_body(resp).await
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let state = test_state();
        let json = post_blog(&state, "A", "B").await;

        assert_eq!(json["title"], "A");
        assert_eq!(json["body"], "B");
        assert!(json["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let state = test_state();
        let first = post_blog(&state, "one", "1").await;
        let second = post_blog(&state, "two", "2").await;

        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn create_missing_body_field_returns_422_and_stores_nothing() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let payload = serde_json::json!({ "title": "no body here" });
        let resp = app
            .oneshot(
                Request::post("/blog")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let app = create_router(Arc::clone(&state));
        let resp = app
            .oneshot(Request::get("/blog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = json_body(resp).await;
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn list_returns_every_created_record() {
        let state = test_state();
        post_blog(&state, "first", "body 1").await;
        post_blog(&state, "second", "body 2").await;
        post_blog(&state, "third", "body 3").await;

        let app = create_router(Arc::clone(&state));
        let resp = app
            .oneshot(Request::get("/blog").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        let blogs = json.as_array().unwrap();
        assert_eq!(blogs.len(), 3);
        assert_eq!(blogs[0]["title"], "first");
        assert_eq!(blogs[2]["body"], "body 3");
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let state = test_state();
        let created = post_blog(&state, "readable", "content").await;
        let id = created["id"].as_i64().unwrap();

        let app = create_router(Arc::clone(&state));
        let resp = app
            .oneshot(
                Request::get(format!("/blog/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let json = json_body(resp).await;
        assert_eq!(json["id"], id);
        assert_eq!(json["title"], "readable");
        assert_eq!(json["body"], "content");
    }

    #[tokio::test]
    async fn get_missing_returns_404_with_detail() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let resp = app
            .oneshot(Request::get("/blog/99999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = json_body(resp).await;
        assert_eq!(json["detail"], "Blog with id 99999 not found");
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let state = test_state();
        let created = post_blog(&state, "doomed", "soon gone").await;
        let id = created["id"].as_i64().unwrap();

        let app = create_router(Arc::clone(&state));
        let resp = app
            .oneshot(
                Request::delete(format!("/blog/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let app = create_router(Arc::clone(&state));
        let resp = app
            .oneshot(
                Request::get(format!("/blog/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_non_integer_id_returns_400() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let resp = app
            .oneshot(Request::get("/blog/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_missing_returns_204() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let resp = app
            .oneshot(Request::delete("/blog/12345").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
