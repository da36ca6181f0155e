//! Shared wiring for in-memory integration tests.

use std::{sync::Arc, time::Duration};

use issueboard::board::{
    BoardState,
    services::{IssueBoard, SessionGate, SharedBoard},
};
use issueboard::issue::adapters::memory::InMemoryIssueStore;
use issueboard::session::{
    adapters::memory::{InMemoryAuthProvider, RecordingNavigator},
    services::CredentialEntry,
};
use rstest::fixture;
use tokio::sync::Mutex;

/// Every collaborator of a running board, backed by in-memory adapters.
pub struct App {
    pub store: InMemoryIssueStore,
    pub auth: Arc<InMemoryAuthProvider>,
    pub navigator: Arc<RecordingNavigator>,
    pub board: SharedBoard<InMemoryIssueStore>,
    pub gate: SessionGate<InMemoryIssueStore, InMemoryAuthProvider, RecordingNavigator>,
    pub entry: CredentialEntry<InMemoryAuthProvider, RecordingNavigator>,
}

/// Provides a freshly wired application for each test.
#[fixture]
pub fn app() -> App {
    let store = InMemoryIssueStore::new();
    let board = Arc::new(Mutex::new(IssueBoard::new(Arc::new(store.clone()))));
    let auth = Arc::new(InMemoryAuthProvider::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let gate = SessionGate::new(Arc::clone(&board), Arc::clone(&auth), Arc::clone(&navigator));
    let entry = CredentialEntry::new(Arc::clone(&auth), Arc::clone(&navigator));
    App {
        store,
        auth,
        navigator,
        board,
        gate,
        entry,
    }
}

/// Fills the creation form's required fields.
pub fn fill_form(board: &mut IssueBoard<InMemoryIssueStore>, title: &str, description: &str) {
    let fields = board.state_mut().form_mut();
    fields.title = title.to_owned();
    fields.description = description.to_owned();
}

/// Waits until the shared board satisfies `predicate`.
///
/// # Errors
///
/// Returns an error when the condition is not reached within two seconds.
pub async fn board_eventually(
    board: &SharedBoard<InMemoryIssueStore>,
    predicate: impl Fn(&BoardState) -> bool,
) -> eyre::Result<()> {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !predicate(board.lock().await.state()) {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .map_err(|_| eyre::eyre!("board condition not reached in time"))
}

/// Waits until the navigator has recorded `count` redirects.
///
/// # Errors
///
/// Returns an error when the redirects do not arrive within two seconds.
pub async fn redirects_eventually(navigator: &RecordingNavigator, count: usize) -> eyre::Result<()> {
    tokio::time::timeout(Duration::from_secs(2), async {
        while navigator.history().len() < count {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .map_err(|_| eyre::eyre!("expected {count} redirects, saw {:?}", navigator.history()))
}
