pub mod assignee;
pub mod board;
pub mod drag;
pub mod issue;
pub mod project;
pub mod seed;

pub use assignee::{Assignee, AssigneeDirectory, AssigneeId};
pub use board::{Board, Column, ColumnId, DropTarget};
pub use drag::{DragEvent, DragSensor, Point, DRAG_ACTIVATION_DISTANCE};
pub use issue::{Issue, IssueId, Priority};
pub use project::{Project, ProjectTemplate, Sprint};
