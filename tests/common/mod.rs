//! Shared helpers for HTTP integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use tracker_lib::IssueStore;
use tracker_rust::api::{self, AppState};
use tracker_rust::seed;

const BODY_LIMIT: usize = 1024 * 1024;

/// Router over a store seeded with the 5 startup sample issues (ids 1-5).
pub fn seeded_app() -> Router {
    let mut store = IssueStore::new();
    for draft in seed::sample_issues() {
        store.create_issue(draft);
    }
    api::router(AppState::new(store))
}

/// Router over an empty store.
pub fn empty_app() -> Router {
    api::router(AppState::new(IssueStore::new()))
}

/// Send one request and decode the response body as JSON.
///
/// Returns `Value::Null` for empty or non-JSON bodies so tests can still
/// assert on the status code.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("failed to build request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
