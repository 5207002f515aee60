use serde::{Deserialize, Serialize};
use std::fmt;

/// Short identifier for an assignee (e.g., JD for Jane Doe)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssigneeId(String);

impl AssigneeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssigneeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person issues can be assigned to
///
/// Assignees are shared reference data: columns hold issues that point at
/// an assignee by ID, they never own the assignee record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: AssigneeId,
    pub name: String,
    pub avatar: String,
}

impl Assignee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: AssigneeId::new(id),
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// Read-only directory of assignees, looked up by ID
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssigneeDirectory {
    assignees: Vec<Assignee>,
}

impl AssigneeDirectory {
    pub fn new(assignees: Vec<Assignee>) -> Self {
        Self { assignees }
    }

    /// Looks up an assignee by ID
    pub fn get(&self, id: &AssigneeId) -> Option<&Assignee> {
        self.assignees.iter().find(|a| &a.id == id)
    }

    /// Returns all assignees in directory order
    pub fn iter(&self) -> impl Iterator<Item = &Assignee> {
        self.assignees.iter()
    }

    pub fn len(&self) -> usize {
        self.assignees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignees.is_empty()
    }
}
