use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::assignee::AssigneeId;

/// Unique identifier for an issue (e.g., TASK-101, AOR-7)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueId(String);

impl IssueId {
    /// Creates a new IssueId from a project key and a counter
    pub fn new(key: &str, counter: u32) -> Self {
        Self(format!("{}-{}", key.to_uppercase(), counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IssueId {
    type Err = crate::error::TaskFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let Some((key, number)) = normalized.split_once('-') else {
            return Err(crate::error::TaskFlowError::InvalidIssueId(s.to_string()));
        };

        let key_valid = !key.is_empty()
            && key.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && key.chars().all(|c| c.is_ascii_alphanumeric());

        if key_valid && number.parse::<u32>().is_ok() {
            Ok(Self(normalized))
        } else {
            Err(crate::error::TaskFlowError::InvalidIssueId(s.to_string()))
        }
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority of an issue on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Priority {
    type Err = crate::error::TaskFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(crate::error::TaskFlowError::InvalidPriority(s.to_string())),
        }
    }
}

/// A single trackable unit of work on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub assignee: AssigneeId,
    pub priority: Priority,
}

impl Issue {
    /// Creates a new issue with the given ID and title
    pub fn new(id: IssueId, title: impl Into<String>, assignee: AssigneeId, priority: Priority) -> Self {
        Self {
            id,
            title: title.into(),
            assignee,
            priority,
        }
    }
}
