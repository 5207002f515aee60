//! Static seed data the app loads at start.
//!
//! The board is memory-resident and not durable across reloads; every
//! session starts from this arrangement.

use chrono::{TimeZone, Utc};

use crate::domain::assignee::{Assignee, AssigneeDirectory, AssigneeId};
use crate::domain::board::{Board, Column};
use crate::domain::issue::{Issue, IssueId, Priority};
use crate::domain::project::Sprint;

/// The seed board: To Do / In Progress / Done with five issues
pub fn sample_board() -> Board {
    Board {
        columns: vec![
            Column::new("todo", "To Do").with_issues(vec![
                Issue::new(
                    IssueId::new("TASK", 101),
                    "Implement user authentication",
                    AssigneeId::new("JD"),
                    Priority::High,
                ),
                Issue::new(
                    IssueId::new("TASK", 102),
                    "Design database schema",
                    AssigneeId::new("AB"),
                    Priority::Medium,
                ),
            ]),
            Column::new("inprogress", "In Progress").with_issues(vec![Issue::new(
                IssueId::new("TASK", 103),
                "Develop API for issue tracking",
                AssigneeId::new("CD"),
                Priority::High,
            )]),
            Column::new("done", "Done").with_issues(vec![
                Issue::new(
                    IssueId::new("TASK", 104),
                    "Set up project repository",
                    AssigneeId::new("JD"),
                    Priority::Low,
                ),
                Issue::new(
                    IssueId::new("TASK", 105),
                    "Configure CI/CD pipeline",
                    AssigneeId::new("EF"),
                    Priority::Low,
                ),
            ]),
        ],
    }
}

/// The seed assignee directory
pub fn sample_assignees() -> AssigneeDirectory {
    AssigneeDirectory::new(vec![
        Assignee::new("JD", "Jane Doe", "/avatars/01.png"),
        Assignee::new("AB", "Alice Bob", "/avatars/02.png"),
        Assignee::new("CD", "Charlie Day", "/avatars/03.png"),
        Assignee::new("EF", "Eve F.", "/avatars/04.png"),
    ])
}

/// The seed sprint for the Scrum view: Oct 16 - Oct 30, 2025
pub fn sample_sprint() -> Sprint {
    Sprint {
        name: "AOR Sprint 1 (Active)".to_string(),
        start_date: Utc
            .with_ymd_and_hms(2025, 10, 16, 0, 0, 0)
            .single()
            .expect("valid seed date"),
        end_date: Utc
            .with_ymd_and_hms(2025, 10, 30, 0, 0, 0)
            .single()
            .expect("valid seed date"),
    }
}
