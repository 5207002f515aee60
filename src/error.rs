use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskFlowError>;

#[derive(Debug, Error)]
pub enum TaskFlowError {
    #[error("Invalid issue ID format: {0}")]
    InvalidIssueId(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Duplicate column ID: {0}")]
    DuplicateColumnId(String),

    #[error("Project name must not be empty")]
    InvalidProjectName,

    #[error("Invalid project key: {0}")]
    InvalidProjectKey(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Email not confirmed. Please check your inbox.")]
    EmailNotConfirmed,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
