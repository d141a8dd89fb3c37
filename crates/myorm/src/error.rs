//! Error types for myorm

use thiserror::Error;

/// Result type alias for myorm operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for statement building and execution
#[derive(Debug, Error)]
pub enum OrmError {
    /// A predicate's custom clause builder failed
    #[error("Filter compile error: {0}")]
    FilterCompile(String),

    /// UPDATE attempted with no WHERE conditions
    #[error("Not allow updating rows with no where conditions")]
    UnsafeUpdate,

    /// An insert row is missing a column present in the first row
    #[error("Insert row {row} is missing column `{column}`")]
    MissingColumn { row: usize, column: String },

    /// Insert called with an empty row sequence
    #[error("Insert requires at least one row")]
    EmptyRows,

    /// Update called with no SET values
    #[error("Update requires at least one SET value")]
    EmptyValues,

    /// Driver error from the executor boundary
    #[error("Driver error: {0}")]
    Driver(#[from] mysql_async::Error),
}

impl OrmError {
    /// Create a filter compile error
    pub fn filter_compile(message: impl Into<String>) -> Self {
        Self::FilterCompile(message.into())
    }

    /// Create a missing-column error for an insert row
    pub fn missing_column(row: usize, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            row,
            column: column.into(),
        }
    }

    /// Check if this is an unsafe-update refusal
    pub fn is_unsafe_update(&self) -> bool {
        matches!(self, Self::UnsafeUpdate)
    }

    /// Check if this is a missing-column error
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }
}
