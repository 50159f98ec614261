//! Error types for the kanban board

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Required text was blank after trimming
    #[error("{field} must not be empty")]
    EmptyInput { field: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task is not listed in the column it is being moved from
    #[error("task '{task}' is not in column '{column}'")]
    TaskNotInColumn { task: String, column: String },

    /// Stored snapshot carries a version this build cannot read
    #[error("unsupported board snapshot version: {version}")]
    UnsupportedVersion { version: u32 },

    /// Storage key cannot be mapped to a value file
    #[error("invalid storage key '{key}': use letters, digits, '-' or '_'")]
    InvalidKey { key: String },

    /// Stored snapshot breaks a board invariant
    #[error("corrupt board snapshot: {message}")]
    Corrupt { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create an empty input error
    pub fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    /// Create a task not found error
    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    /// Create a column not found error
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a corrupt snapshot error
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    /// Check if this error was caused by user input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::TaskNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::TaskNotInColumn { .. }
        )
    }
}
