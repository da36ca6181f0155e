//! Error types for issue board operations.

use crate::issue::{
    domain::{IssueDomainError, IssueId},
    ports::IssueStoreError,
};
use crate::session::ports::AuthError;
use thiserror::Error;

/// Errors returned by board operations.
///
/// Store failures are also recorded on the board state so they can be shown
/// to the user.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Form input failed validation.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),
    /// The issue store failed.
    #[error(transparent)]
    Store(#[from] IssueStoreError),
    /// The auth provider failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// No principal is signed in.
    #[error("no user is signed in")]
    NotSignedIn,
    /// A duplicate decision was given with no warning outstanding.
    #[error("no submission is awaiting duplicate confirmation")]
    NoPendingSubmission,
    /// The issue is not in the cached list.
    #[error("issue not found on the board: {0}")]
    UnknownIssue(IssueId),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
