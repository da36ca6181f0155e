//! Error types for issue domain validation and parsing.

use super::{IssueId, IssueStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain issue values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The issue title is empty after trimming.
    #[error("issue title must not be empty")]
    EmptyTitle,

    /// The issue description is empty after trimming.
    #[error("issue description must not be empty")]
    EmptyDescription,

    /// The priority label is not one of `Low`, `Medium` or `High`.
    #[error("unknown issue priority: {0}")]
    UnknownPriority(String),

    /// The status label is not one of `Open`, `In Progress` or `Done`.
    #[error("unknown issue status: {0}")]
    UnknownStatus(String),

    /// The requested status change is not permitted by the workflow guard.
    #[error("Cannot move directly from {from} to {to}. Please set to In Progress first.")]
    InvalidStatusTransition {
        /// Issue whose status change was rejected.
        issue_id: IssueId,
        /// Current status.
        from: IssueStatus,
        /// Requested status.
        to: IssueStatus,
    },
}
