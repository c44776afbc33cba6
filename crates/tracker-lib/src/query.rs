//! Query types and the listing pipeline: filter, sort, paginate.
//!
//! The pipeline operates on owned snapshots taken from the store, so a
//! long listing never observes concurrent store mutations.

use crate::model::{Issue, Priority, Status};

/// Fields to update on an issue.
///
/// Each field is wrapped in `Option` so "field omitted" is distinguishable
/// from "field provided"; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
}

impl IssueUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
    }
}

/// Filter options for listing issues.
///
/// `None` (or an empty string) means "no filter" for that field. The
/// field filters are exact matches and conjunctive; `search` is a
/// case-insensitive substring match against the title only.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
}

impl ListFilters {
    /// Keep only the issues that pass every configured filter.
    #[must_use]
    pub fn apply(&self, issues: Vec<Issue>) -> Vec<Issue> {
        let needle = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let status = self.status.as_deref().filter(|s| !s.is_empty());
        let priority = self.priority.as_deref().filter(|s| !s.is_empty());
        let assignee = self.assignee.as_deref().filter(|s| !s.is_empty());

        issues
            .into_iter()
            .filter(|issue| {
                if let Some(ref needle) = needle {
                    if !issue.title.to_lowercase().contains(needle) {
                        return false;
                    }
                }
                if let Some(status) = status {
                    if issue.status.as_str() != status {
                        return false;
                    }
                }
                if let Some(priority) = priority {
                    if issue.priority.as_str() != priority {
                        return false;
                    }
                }
                if let Some(assignee) = assignee {
                    if issue.assignee != assignee {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}

/// Sort field for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Title,
    Status,
    Priority,
    Assignee,
    UpdatedAt,
    #[default]
    Id,
}

impl SortKey {
    /// Parse a `sortBy` parameter; unrecognized values fall back to `Id`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "status" => Self::Status,
            "priority" => Self::Priority,
            "assignee" => Self::Assignee,
            "updatedAt" => Self::UpdatedAt,
            _ => Self::Id,
        }
    }
}

/// Sort direction for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a `sortOrder` parameter; anything but `desc` is ascending.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// Stable sort by the given key.
///
/// Descending order reverses the comparator itself, not the sorted list,
/// so equal keys keep their relative snapshot order in both directions.
pub fn sort_issues(issues: &mut [Issue], key: SortKey, order: SortOrder) {
    issues.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
            SortKey::Assignee => a.assignee.cmp(&b.assignee),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::Id => a.id.cmp(&b.id),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<Issue>,
    pub page: u32,
    pub page_size: u32,
    /// Count after filtering, before pagination.
    pub total: usize,
    pub total_pages: u32,
}

/// Slice out one page, clamped to the available bounds.
///
/// Callers guarantee `page >= 1` and `page_size >= 1`; an out-of-range
/// page yields empty items rather than an error.
#[must_use]
pub fn paginate(issues: Vec<Issue>, page: u32, page_size: u32) -> Page {
    let total = issues.len();
    let total_pages = u32::try_from(total.div_ceil(page_size as usize)).unwrap_or(u32::MAX);

    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let items = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size as usize).min(total);
        issues[start..end].to_vec()
    };

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_issue(id: u64, title: &str) -> Issue {
        let now = Utc::now();
        Issue {
            id,
            title: title.to_string(),
            description: String::new(),
            status: Status::Open,
            priority: Priority::Medium,
            assignee: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_search_is_case_insensitive_and_title_only() {
        let mut broken = make_issue(1, "Login page not working");
        broken.description = "dark corners".to_string();
        let issues = vec![broken, make_issue(2, "Add dark mode")];

        let filters = ListFilters {
            search: Some("LOGIN".to_string()),
            ..Default::default()
        };
        let hits = filters.apply(issues.clone());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // Description matches don't count.
        let filters = ListFilters {
            search: Some("corners".to_string()),
            ..Default::default()
        };
        assert!(filters.apply(issues).is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let mut a = make_issue(1, "A");
        a.status = Status::Closed;
        a.priority = Priority::High;
        let mut b = make_issue(2, "B");
        b.status = Status::Closed;
        let mut c = make_issue(3, "C");
        c.priority = Priority::High;

        let filters = ListFilters {
            status: Some("Closed".to_string()),
            priority: Some("High".to_string()),
            ..Default::default()
        };
        let hits = filters.apply(vec![a, b, c]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_empty_filter_strings_match_everything() {
        let issues = vec![make_issue(1, "A"), make_issue(2, "B")];
        let filters = ListFilters {
            search: Some(String::new()),
            status: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filters.apply(issues).len(), 2);
    }

    #[test]
    fn test_sort_priority_ranks_unknown_first() {
        let mut high = make_issue(1, "high");
        high.priority = Priority::High;
        let mut low = make_issue(2, "low");
        low.priority = Priority::Low;
        let mut med = make_issue(3, "med");
        med.priority = Priority::Medium;
        let mut odd = make_issue(4, "odd");
        odd.priority = Priority::Custom("Whenever".to_string());

        let mut issues = vec![high, low, med, odd];
        sort_issues(&mut issues, SortKey::Priority, SortOrder::Asc);
        let titles: Vec<&str> = issues.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["odd", "low", "med", "high"]);
    }

    #[test]
    fn test_sort_title_is_case_insensitive() {
        let mut issues = vec![
            make_issue(1, "banana"),
            make_issue(2, "Apple"),
            make_issue(3, "cherry"),
        ];
        sort_issues(&mut issues, SortKey::Title, SortOrder::Asc);
        let ids: Vec<u64> = issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, [2, 1, 3]);
    }

    #[test]
    fn test_sort_desc_keeps_equal_keys_stable() {
        // All four share a priority rank; descending must not disturb
        // their relative snapshot order.
        let mut issues = vec![
            make_issue(10, "a"),
            make_issue(11, "b"),
            make_issue(12, "c"),
            make_issue(13, "d"),
        ];
        sort_issues(&mut issues, SortKey::Priority, SortOrder::Desc);
        let ids: Vec<u64> = issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, [10, 11, 12, 13]);
    }

    #[test]
    fn test_sort_by_id_desc() {
        let mut issues = vec![make_issue(1, "a"), make_issue(3, "c"), make_issue(2, "b")];
        sort_issues(&mut issues, SortKey::Id, SortOrder::Desc);
        let ids: Vec<u64> = issues.iter().map(|i| i.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn test_paginate_splits_and_counts() {
        let issues: Vec<Issue> = (1..=12).map(|i| make_issue(i, "t")).collect();

        let first = paginate(issues.clone(), 1, 5);
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total, 12);
        assert_eq!(first.total_pages, 3);

        let last = paginate(issues, 3, 5);
        assert_eq!(last.items.len(), 2);
        assert_eq!(last.items[0].id, 11);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let issues = vec![make_issue(1, "only")];
        let page = paginate(issues, 9, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let page = paginate(Vec::new(), 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_sort_key_parse_falls_back_to_id() {
        assert_eq!(SortKey::parse("updatedAt"), SortKey::UpdatedAt);
        assert_eq!(SortKey::parse("nonsense"), SortKey::Id);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }
}
