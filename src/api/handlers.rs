//! Request handlers.
//!
//! The listing handler runs the full pipeline in strict order: snapshot,
//! search, field filters, stable sort, paginate.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracker_lib::query::{self, ListFilters, SortKey, SortOrder};
use tracker_lib::{Issue, IssueDraft};

use crate::api::AppState;
use crate::api::dto::{
    CreateIssueRequest, HealthResponse, ListIssuesResponse, ListParams, MessageResponse,
    UpdateIssueRequest,
};
use crate::api::error::ApiError;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /issues`
pub async fn list_issues(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListIssuesResponse>, ApiError> {
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page == 0 {
        return Err(ApiError::validation("page must be a positive integer"));
    }
    if page_size == 0 {
        return Err(ApiError::validation("pageSize must be a positive integer"));
    }

    // Snapshot under the lock; the pipeline runs on the owned copy, so
    // concurrent mutations cannot affect this response.
    let snapshot = state.store()?.snapshot();

    let filters = ListFilters {
        search: params.search,
        status: params.status,
        priority: params.priority,
        assignee: params.assignee,
    };
    let mut issues = filters.apply(snapshot);

    let key = params.sort_by.as_deref().map_or(SortKey::Id, SortKey::parse);
    let order = params
        .sort_order
        .as_deref()
        .map_or(SortOrder::Asc, SortOrder::parse);
    query::sort_issues(&mut issues, key, order);

    let paged = query::paginate(issues, page, page_size);
    Ok(Json(paged.into()))
}

/// `GET /issues/{id}`
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state.store()?.get_issue(id)?.clone();
    Ok(Json(issue))
}

/// `POST /issues`
pub async fn create_issue(
    State(state): State<AppState>,
    Json(body): Json<CreateIssueRequest>,
) -> Result<(StatusCode, Json<Issue>), ApiError> {
    let title = match body.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(ApiError::validation("Title is required")),
    };

    let draft = IssueDraft {
        title,
        description: body.description.unwrap_or_default(),
        status: body.status.unwrap_or_default(),
        priority: body.priority.unwrap_or_default(),
        assignee: body.assignee.unwrap_or_default(),
    };

    let issue = state.store()?.create_issue(draft);
    Ok((StatusCode::CREATED, Json(issue)))
}

/// `PUT /issues/{id}`
pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateIssueRequest>,
) -> Result<Json<Issue>, ApiError> {
    let update = body.into_update();
    if update.is_empty() {
        return Err(ApiError::validation("No data provided"));
    }

    let issue = state.store()?.update_issue(id, &update)?;
    Ok(Json(issue))
}

/// `DELETE /issues/{id}`
pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store()?;
    store.get_issue(id)?;
    store.delete_issue(id);

    Ok(Json(MessageResponse {
        message: "Issue deleted successfully",
    }))
}
