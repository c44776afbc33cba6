//! In-memory issue store.
//!
//! The collection is an insertion-ordered `Vec`; IDs come from a counter
//! that starts at 1 and is never reused, even after deletes. The store is
//! not internally synchronized — callers own it and decide how to share
//! it (the HTTP layer wraps it in a single mutex).

use chrono::Utc;

use crate::error::{Result, TrackerError};
use crate::model::{Issue, Priority, Status};
use crate::query::IssueUpdate;

/// Input for creating a new issue; the store assigns id and timestamps.
#[derive(Debug, Clone, Default)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub assignee: String,
}

/// In-memory issue store.
#[derive(Debug)]
pub struct IssueStore {
    issues: Vec<Issue>,
    next_id: u64,
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueStore {
    /// Create a new empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issues: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a new issue from the draft and append it to the collection.
    ///
    /// Title presence is the caller's contract; the store itself never
    /// fails here.
    pub fn create_issue(&mut self, draft: IssueDraft) -> Issue {
        let now = Utc::now();
        let issue = Issue {
            id: self.next_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;

        tracing::debug!(id = issue.id, title = %issue.title, "issue created");
        self.issues.push(issue.clone());
        issue
    }

    /// Get a single issue by ID.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get_issue(&self, id: u64) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .ok_or(TrackerError::IssueNotFound { id })
    }

    /// Owned snapshot of the full collection in insertion order.
    ///
    /// Later store mutations never affect a snapshot already taken.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    /// Apply a partial update to an existing issue.
    ///
    /// Only `Some` fields change; `updated_at` refreshes unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist, or `Validation`
    /// if the update sets the title to a blank string.
    pub fn update_issue(&mut self, id: u64, update: &IssueUpdate) -> Result<Issue> {
        let issue = self
            .issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or(TrackerError::IssueNotFound { id })?;

        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(TrackerError::validation("title", "cannot be empty"));
            }
            issue.title.clone_from(title);
        }
        if let Some(ref description) = update.description {
            issue.description.clone_from(description);
        }
        if let Some(ref status) = update.status {
            issue.status = status.clone();
        }
        if let Some(ref priority) = update.priority {
            issue.priority = priority.clone();
        }
        if let Some(ref assignee) = update.assignee {
            issue.assignee.clone_from(assignee);
        }

        issue.updated_at = Utc::now();

        tracing::debug!(id, "issue updated");
        Ok(issue.clone())
    }

    /// Remove the issue with the given ID.
    ///
    /// Removing a non-existent ID is a no-op; the HTTP layer checks
    /// existence first and maps absence to a not-found response.
    pub fn delete_issue(&mut self, id: u64) {
        self.issues.retain(|issue| issue.id != id);
        tracing::debug!(id, "issue deleted");
    }

    /// Number of issues in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
