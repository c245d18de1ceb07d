//! Error types surfaced by notebook mutations.

use thiserror::Error;
use uuid::Uuid;

/// Failures reported by [`crate::Notebook`] mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotebookError {
    /// The referenced tag is not part of the notebook.
    #[error("unknown tag '{id}'")]
    UnknownTag {
        /// Identifier that failed to resolve.
        id: Uuid,
    },
    /// A note was submitted without a title.
    #[error("note title must not be empty")]
    EmptyTitle,
    /// A tag was submitted without a label.
    #[error("tag label must not be empty")]
    EmptyLabel,
}

/// Convenience alias for notebook results.
pub type NotebookResult<T> = Result<T, NotebookError>;
