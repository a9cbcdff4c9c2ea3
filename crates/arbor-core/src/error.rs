//! Error types for the tree store.

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while manipulating a [`TreeStore`](crate::TreeStore).
///
/// A lookup that matches nothing is not an error: lookups return `Option`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The header schema is empty or incompatible with the existing nodes.
    #[error("Invalid header schema: {reason}")]
    InvalidSchema { reason: String },

    /// Input had the wrong shape for the requested operation.
    #[error("Invalid argument: expected {expected}, got {got}")]
    InvalidArgument {
        expected: &'static str,
        got: &'static str,
    },

    /// The node ID is invalid or the node has been removed.
    #[error("Invalid or removed node ID")]
    InvalidNodeId,

    /// A column index beyond the declared schema.
    #[error("Column {column} is out of range for a store with {column_count} column(s)")]
    ColumnOutOfRange { column: usize, column_count: usize },
}

impl StoreError {
    /// Create a schema error.
    pub fn invalid_schema(reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            reason: reason.into(),
        }
    }

    /// Create an argument error.
    pub fn invalid_argument(expected: &'static str, got: &'static str) -> Self {
        Self::InvalidArgument { expected, got }
    }
}
