//! Error types for grail.

use thiserror::Error;

/// The closed set of failures the builder can surface.
///
/// Errors travel exclusively through `Result`; nothing in this crate panics,
/// retries, or logs on the side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// An operation required at least one top-level collection and none
    /// existed yet.
    #[error("No collection selected. Call from_collection() first")]
    MissingCollection,

    /// A selection had neither fields nor sub-queries, so there is nothing
    /// to select.
    #[error("Collection '{0}' selects no fields and no sub-queries")]
    MissingFields(String),

    /// Reserved: no current code path raises this.
    #[error("Missing arguments")]
    MissingArguments,

    /// An internal consistency check failed.
    #[error("Invalid builder state: {0}")]
    InvalidState(String),
}

impl QueryError {
    /// Create an invalid-state error with the given detail.
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }
}
