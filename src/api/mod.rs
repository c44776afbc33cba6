//! HTTP layer: router, shared state, handlers, and wire types.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracker_lib::IssueStore;

use crate::api::error::ApiError;

/// Shared application state: one issue store behind a single lock.
///
/// The collection is small, so lock granularity is not a concern; every
/// handler holds the lock only for the duration of its store calls.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<IssueStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: IssueStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub(crate) fn store(&self) -> Result<MutexGuard<'_, IssueStore>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::internal("issue store lock poisoned"))
    }
}

/// Build the application router.
///
/// The frontend is served from a different origin, so CORS is wide open.
#[must_use]
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/issues",
            get(handlers::list_issues).post(handlers::create_issue),
        )
        .route(
            "/issues/:id",
            get(handlers::get_issue)
                .put(handlers::update_issue)
                .delete(handlers::delete_issue),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
