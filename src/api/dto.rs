//! Wire types for the HTTP API.
//!
//! `Issue` itself serializes straight from `tracker-lib`; the types here
//! cover request bodies, query parameters, and response envelopes.

use serde::{Deserialize, Serialize};
use tracker_lib::{Issue, IssueUpdate, Page, Priority, Status};

/// Body of `POST /issues`.
///
/// `title` stays an `Option` so a missing field maps to the API's own
/// validation error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
}

/// Body of `PUT /issues/{id}`; every field optional.
#[derive(Debug, Deserialize)]
pub struct UpdateIssueRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
}

impl UpdateIssueRequest {
    pub(crate) fn into_update(self) -> IssueUpdate {
        IssueUpdate {
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            assignee: self.assignee,
        }
    }
}

/// Query parameters of `GET /issues`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Pagination block of the listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: usize,
    pub total_pages: u32,
}

/// Response of `GET /issues`.
#[derive(Debug, Serialize)]
pub struct ListIssuesResponse {
    pub issues: Vec<Issue>,
    pub pagination: Pagination,
}

impl From<Page> for ListIssuesResponse {
    fn from(page: Page) -> Self {
        Self {
            pagination: Pagination {
                page: page.page,
                page_size: page.page_size,
                total: page.total,
                total_pages: page.total_pages,
            },
            issues: page.items,
        }
    }
}
