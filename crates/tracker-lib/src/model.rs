//! Core data types for `tracker-lib`.
//!
//! Wire format is camelCase JSON; timestamps serialize as RFC 3339 with a
//! trailing `Z` (chrono's default for `DateTime<Utc>`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue workflow status.
///
/// The label set is open-ended: well-known labels get named variants,
/// anything else round-trips verbatim through `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
    #[serde(untagged)]
    Custom(String),
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Issue priority label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(untagged)]
    Custom(String),
}

impl Priority {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Custom(value) => value,
        }
    }

    /// Sort rank: Low=1, Medium=2, High=3. Unrecognized labels rank 0,
    /// before `Low` in ascending order.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Custom(_) => 0,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary issue entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique numeric ID, assigned by the store, never reused.
    pub id: u64,

    /// Title (required, non-empty).
    pub title: String,

    /// Detailed description.
    #[serde(default)]
    pub description: String,

    /// Workflow status.
    #[serde(default)]
    pub status: Status,

    /// Priority label.
    #[serde(default)]
    pub priority: Priority,

    /// Assigned user; empty means unassigned.
    #[serde(default)]
    pub assignee: String,

    /// Creation timestamp, set once.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp, refreshed on every successful update.
    pub updated_at: DateTime<Utc>,
}
