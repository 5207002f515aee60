use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::domain::drag::DragEvent;
use crate::domain::issue::{Issue, IssueId};
use crate::error::{Result, TaskFlowError};

/// Identifier for a board column (e.g., "todo", "inprogress", "done")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered lane of issues on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub issues: Vec<Issue>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
            issues: Vec::new(),
        }
    }

    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    /// Position of an issue within this column
    fn position_of(&self, issue_id: &IssueId) -> Option<usize> {
        self.issues.iter().position(|issue| &issue.id == issue_id)
    }

    pub fn contains(&self, issue_id: &IssueId) -> bool {
        self.position_of(issue_id).is_some()
    }
}

/// Where a dragged issue was released
///
/// Resolved exactly once at gesture end; an absent target (released outside
/// any drop zone) is `None` at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget {
    Column(ColumnId),
    Issue(IssueId),
}

/// The full kanban board: an ordered set of columns, each holding an
/// ordered sequence of issues.
///
/// Invariants: column IDs are unique, and an issue ID appears in at most
/// one column. The board is a value; [`Board::apply_drag`] never mutates
/// in place, it returns the replacement board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board from the given columns, rejecting duplicate column IDs
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(&column.id) {
                return Err(TaskFlowError::DuplicateColumnId(column.id.to_string()));
            }
        }
        Ok(Self { columns })
    }

    /// Total number of issues across all columns
    pub fn issue_count(&self) -> usize {
        self.columns.iter().map(|col| col.issues.len()).sum()
    }

    /// Finds the column currently holding the given issue
    pub fn column_of(&self, issue_id: &IssueId) -> Option<&Column> {
        self.columns.iter().find(|col| col.contains(issue_id))
    }

    /// Finds an issue anywhere on the board
    pub fn find_issue(&self, issue_id: &IssueId) -> Option<&Issue> {
        self.columns
            .iter()
            .flat_map(|col| col.issues.iter())
            .find(|issue| &issue.id == issue_id)
    }

    /// Resolves a raw drop identifier against the current board state.
    ///
    /// A column ID wins over an issue ID; an identifier matching neither
    /// resolves to `None` (stale or malformed reference).
    pub fn resolve_target(&self, raw: &str) -> Option<DropTarget> {
        if let Some(column) = self.columns.iter().find(|col| col.id.as_str() == raw) {
            return Some(DropTarget::Column(column.id.clone()));
        }
        self.columns
            .iter()
            .flat_map(|col| col.issues.iter())
            .find(|issue| issue.id.as_str() == raw)
            .map(|issue| DropTarget::Issue(issue.id.clone()))
    }

    /// Case-insensitive search over issue titles and IDs
    pub fn search(&self, query: &str) -> Vec<&Issue> {
        let query_lower = query.to_lowercase();
        self.columns
            .iter()
            .flat_map(|col| col.issues.iter())
            .filter(|issue| {
                issue.title.to_lowercase().contains(&query_lower)
                    || issue.id.as_str().to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Applies a completed drag gesture, producing the replacement board.
    ///
    /// The failure policy is silent rejection: a cancelled gesture, a
    /// self-drop, or a target that no longer resolves to a live column all
    /// return the board unchanged. The reducer never errors -- a drag UI
    /// must not leave the board half-updated.
    pub fn apply_drag(&self, source: &IssueId, target: Option<&DropTarget>) -> Board {
        let Some(target) = target else {
            // Released outside any drop zone: cancelled move
            return self.clone();
        };

        if matches!(target, DropTarget::Issue(id) if id == source) {
            return self.clone();
        }

        let Some(source_col) = self.columns.iter().position(|col| col.contains(source)) else {
            debug!(source = %source, "drag source not on board, ignoring");
            return self.clone();
        };

        // Resolve the target column: a column ID directly, otherwise the
        // column holding the target issue.
        let target_col = match target {
            DropTarget::Column(col_id) => self.columns.iter().position(|col| &col.id == col_id),
            DropTarget::Issue(issue_id) => {
                self.columns.iter().position(|col| col.contains(issue_id))
            }
        };
        let Some(target_col) = target_col else {
            debug!(source = %source, ?target, "drop target not on board, ignoring");
            return self.clone();
        };

        let mut board = self.clone();

        if source_col == target_col {
            // Same-column reorder: move the source to the target issue's
            // index, both computed on the sequence as it was at release.
            let DropTarget::Issue(target_issue) = target else {
                // Dropped on its own column header/body: position unchanged
                return board;
            };
            let column = &mut board.columns[source_col];
            let (Some(from), Some(to)) = (
                column.position_of(source),
                column.position_of(target_issue),
            ) else {
                return board;
            };
            if from != to {
                let issue = column.issues.remove(from);
                column.issues.insert(to, issue);
            }
        } else {
            // Cross-column move: lift out of the origin, insert at the
            // target issue's position or append on an empty-column drop.
            let Some(from) = board.columns[source_col].position_of(source) else {
                return board;
            };
            let issue = board.columns[source_col].issues.remove(from);

            let column = &mut board.columns[target_col];
            let to = match target {
                DropTarget::Issue(target_issue) => column
                    .position_of(target_issue)
                    .unwrap_or(column.issues.len()),
                DropTarget::Column(_) => column.issues.len(),
            };
            column.issues.insert(to, issue);
        }

        debug_assert_eq!(board.issue_count(), self.issue_count());
        board
    }

    /// Reducer form for a resolved gesture: `(Board, DragEvent) -> Board`
    pub fn apply(&self, event: &DragEvent) -> Board {
        self.apply_drag(&event.source, event.target.as_ref())
    }
}

impl Default for Board {
    /// The standard empty three-column board for a fresh project
    fn default() -> Self {
        Self {
            columns: vec![
                Column::new("todo", "To Do"),
                Column::new("inprogress", "In Progress"),
                Column::new("done", "Done"),
            ],
        }
    }
}
