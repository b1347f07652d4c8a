//! Event Store Errors
//!
//! Error types for event store operations.

use crate::domain::EventId;

/// Errors that can occur in the event store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No event with this identifier
    #[error("No event found with id {0}")]
    NotFound(EventId),

    /// Row did not match the event column layout
    #[error("Failed to decode event row: {0}")]
    Decode(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if this error is a missing event
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Classify an error raised while reading a column out of a row.
    pub(crate) fn from_column(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::TypeNotFound { .. } => StoreError::Decode(err.to_string()),
            other => StoreError::Database(other),
        }
    }
}
