//! Shared world state for issue board BDD scenarios.

use std::sync::Arc;

use issueboard::board::{
    BoardError, BoardNotice,
    services::{IssueBoard, SubmitOutcome},
};
use issueboard::issue::adapters::memory::InMemoryIssueStore;
use rstest::fixture;

/// Scenario world for issue board behaviour tests.
pub struct BoardWorld {
    pub store: InMemoryIssueStore,
    pub board: IssueBoard<InMemoryIssueStore>,
    pub last_outcome: Option<Result<SubmitOutcome, BoardError>>,
    pub last_notice: Option<Result<BoardNotice, BoardError>>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryIssueStore::new();
        let board = IssueBoard::new(Arc::new(store.clone()));
        Self {
            store,
            board,
            last_outcome: None,
            last_notice: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
