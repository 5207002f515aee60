use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::board::Board;
use crate::error::{Result, TaskFlowError};

/// Board template chosen when creating a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectTemplate {
    Kanban,
    Scrum,
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kanban => write!(f, "Kanban"),
            Self::Scrum => write!(f, "Scrum"),
        }
    }
}

/// A project: the owner of one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    /// Short uppercase identifier prefixed onto issue IDs (e.g. AOR)
    pub key: String,
    pub template: ProjectTemplate,
}

impl Project {
    /// Creates a project, validating name and key.
    ///
    /// The key must be 2-10 uppercase ASCII alphanumerics starting with a
    /// letter; it becomes the prefix of every issue ID in the project.
    pub fn new(name: impl Into<String>, key: impl Into<String>, template: ProjectTemplate) -> Result<Self> {
        let name = name.into();
        let key = key.into();

        if name.trim().is_empty() {
            return Err(TaskFlowError::InvalidProjectName);
        }
        if !Self::key_is_valid(&key) {
            return Err(TaskFlowError::InvalidProjectKey(key));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            key,
            template,
        })
    }

    fn key_is_valid(key: &str) -> bool {
        (2..=10).contains(&key.len())
            && key.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            && key
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    /// The empty three-column board a fresh project starts with.
    ///
    /// Both templates share the column layout; Scrum projects additionally
    /// run the board inside a sprint.
    pub fn starter_board(&self) -> Board {
        Board::default()
    }
}

/// A timeboxed iteration for Scrum projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Sprint {
    /// Creates a sprint, validating that the range is not inverted
    pub fn new(name: impl Into<String>, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Result<Self> {
        if start_date > end_date {
            return Err(TaskFlowError::InvalidDateRange {
                start: start_date.to_rfc3339(),
                end: end_date.to_rfc3339(),
            });
        }
        Ok(Self {
            name: name.into(),
            start_date,
            end_date,
        })
    }

    /// Whether the sprint is running at the given instant
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at && at <= self.end_date
    }
}
