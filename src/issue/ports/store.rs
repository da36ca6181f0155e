//! Store port for issue persistence.

use crate::issue::domain::{Issue, NewIssue};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue store operations.
pub type IssueStoreResult<T> = Result<T, IssueStoreError>;

/// Issue persistence contract.
///
/// The store owns the issue collection. Callers never assume exclusive
/// access and always re-read the full list after a write.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Inserts a new issue, assigning its identifier and server timestamp.
    ///
    /// Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::Persistence`] when the write fails.
    async fn insert(&self, issue: &NewIssue) -> IssueStoreResult<Issue>;

    /// Returns every issue ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::Persistence`] when the read fails.
    async fn list_newest_first(&self) -> IssueStoreResult<Vec<Issue>>;
}

/// Errors returned by issue store implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
