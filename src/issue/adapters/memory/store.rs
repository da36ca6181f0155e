//! In-memory issue store for tests and local wiring.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock};

use crate::issue::{
    domain::{Issue, IssueId, NewIssue},
    ports::{IssueStore, IssueStoreError, IssueStoreResult},
};

/// Thread-safe in-memory issue store.
///
/// Timestamps come from the injected clock. Issues sharing a timestamp are
/// ordered by insertion, later inserts first.
pub struct InMemoryIssueStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryIssueState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryIssueState {
    issues: Vec<StoredIssue>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct StoredIssue {
    sequence: u64,
    issue: Issue,
}

impl InMemoryIssueStore<DefaultClock> {
    /// Creates an empty store backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryIssueStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryIssueStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryIssueStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store that stamps inserts with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryIssueState::default())),
            clock,
        }
    }

    /// Returns the number of stored issues.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::Persistence`] when the lock is poisoned.
    pub fn issue_count(&self) -> IssueStoreResult<usize> {
        let state = self.state.read().map_err(|err| {
            IssueStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.issues.len())
    }
}

#[async_trait]
impl<C> IssueStore for InMemoryIssueStore<C>
where
    C: Clock + Send + Sync,
{
    async fn insert(&self, issue: &NewIssue) -> IssueStoreResult<Issue> {
        let mut state = self.state.write().map_err(|err| {
            IssueStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let stored = Issue::from_insert(issue, IssueId::new(), self.clock.utc());
        let sequence = state.next_sequence;
        state.next_sequence = sequence.saturating_add(1);
        state.issues.push(StoredIssue {
            sequence,
            issue: stored.clone(),
        });
        Ok(stored)
    }

    async fn list_newest_first(&self) -> IssueStoreResult<Vec<Issue>> {
        let state = self.state.read().map_err(|err| {
            IssueStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let mut rows: Vec<&StoredIssue> = state.issues.iter().collect();
        rows.sort_by(|left, right| {
            right
                .issue
                .created_at()
                .cmp(&left.issue.created_at())
                .then_with(|| right.sequence.cmp(&left.sequence))
        });
        Ok(rows.into_iter().map(|row| row.issue.clone()).collect())
    }
}
