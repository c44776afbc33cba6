//! Fixed sample data loaded at startup, before the server accepts
//! requests. The store assigns these ids 1-5.

use tracker_lib::{IssueDraft, Priority, Status};

/// The five sample issues every fresh server starts with.
#[must_use]
pub fn sample_issues() -> Vec<IssueDraft> {
    vec![
        IssueDraft {
            title: "Login page not working".to_string(),
            description: "Users cannot login to the application".to_string(),
            status: Status::Open,
            priority: Priority::High,
            assignee: "john.doe".to_string(),
        },
        IssueDraft {
            title: "Add dark mode".to_string(),
            description: "Implement dark mode theme for the application".to_string(),
            status: Status::InProgress,
            priority: Priority::Medium,
            assignee: "jane.smith".to_string(),
        },
        IssueDraft {
            title: "Fix mobile responsiveness".to_string(),
            description: "Mobile view is broken on some pages".to_string(),
            status: Status::Open,
            priority: Priority::Low,
            assignee: String::new(),
        },
        IssueDraft {
            title: "Database optimization".to_string(),
            description: "Improve query performance".to_string(),
            status: Status::Closed,
            priority: Priority::High,
            assignee: "mike.johnson".to_string(),
        },
        IssueDraft {
            title: "Add user registration".to_string(),
            description: "Allow new users to register".to_string(),
            status: Status::Open,
            priority: Priority::Medium,
            assignee: "sarah.wilson".to_string(),
        },
    ]
}
