//! # Task Flow Core
//!
//! Core board state and domain models for Task Flow project management.
//!
//! This crate provides the kanban/scrum board value, the pure drag-and-drop
//! reorder reducer, and the gesture state machine that feeds it, without any
//! dependency on a specific UI implementation. The rendering layer holds a
//! [`Board`], feeds pointer input through a [`domain::drag::DragSensor`],
//! and replaces the board wholesale with the value returned by
//! [`Board::apply_drag`].
//!
//! Authentication is delegated to an external backend behind the
//! [`backend::AuthBackend`] trait; nothing it returns ever touches board
//! state.

pub mod backend;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use backend::{AuthBackend, Credentials, NewAccount, UserRecord};
pub use domain::{
    board::{Board, Column, ColumnId, DropTarget},
    drag::{DragEvent, DragSensor, Point},
    issue::{Issue, IssueId, Priority},
};
pub use error::{Result, TaskFlowError};
