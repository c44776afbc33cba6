//! `tracker-lib` — In-process issue tracking store.
//!
//! Provides a standalone, database-free API for managing tracker issues.
//! All data lives in memory; the store is a plain owned value so callers
//! (and tests) construct isolated instances and decide how to share them.
//!
//! # Quick Start
//!
//! ```
//! use tracker_lib::{IssueDraft, IssueStore, IssueUpdate};
//!
//! let mut store = IssueStore::new();
//!
//! // Create
//! let issue = store.create_issue(IssueDraft {
//!     title: "New task".into(),
//!     ..Default::default()
//! });
//!
//! // Update
//! store.update_issue(issue.id, &IssueUpdate {
//!     assignee: Some("jane.smith".into()),
//!     ..Default::default()
//! }).unwrap();
//!
//! // Query
//! let all = store.snapshot();
//! assert_eq!(all.len(), 1);
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod store;

pub use error::{Result, TrackerError};
pub use model::{Issue, Priority, Status};
pub use query::{IssueUpdate, ListFilters, Page, SortKey, SortOrder};
pub use store::{IssueDraft, IssueStore};
