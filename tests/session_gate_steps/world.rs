//! Shared world state for session gate BDD scenarios.

use std::{sync::Arc, time::Duration};

use issueboard::board::{
    BoardState,
    services::{IssueBoard, SessionGate, SessionSubscription},
};
use issueboard::issue::adapters::memory::InMemoryIssueStore;
use issueboard::session::{
    adapters::memory::{InMemoryAuthProvider, RecordingNavigator},
    services::{CredentialEntry, CredentialForm},
};
use rstest::fixture;
use tokio::sync::Mutex;

const POLL_ATTEMPTS: usize = 200;
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Gate type wired to in-memory adapters.
pub type TestGate = SessionGate<InMemoryIssueStore, InMemoryAuthProvider, RecordingNavigator>;

/// Scenario world for session gate behaviour tests.
pub struct GateWorld {
    pub store: InMemoryIssueStore,
    pub auth: Arc<InMemoryAuthProvider>,
    pub navigator: Arc<RecordingNavigator>,
    pub gate: TestGate,
    pub entry: CredentialEntry<InMemoryAuthProvider, RecordingNavigator>,
    pub form: CredentialForm,
    pub subscription: Option<SessionSubscription>,
}

impl GateWorld {
    /// Creates a world with no accounts and no issues.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryIssueStore::new();
        let board = Arc::new(Mutex::new(IssueBoard::new(Arc::new(store.clone()))));
        let auth = Arc::new(InMemoryAuthProvider::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let gate = SessionGate::new(board, Arc::clone(&auth), Arc::clone(&navigator));
        let entry = CredentialEntry::new(Arc::clone(&auth), Arc::clone(&navigator));
        Self {
            store,
            auth,
            navigator,
            gate,
            entry,
            form: CredentialForm::new(),
            subscription: None,
        }
    }

    /// Polls the navigator until it rests on `route`.
    pub fn wait_for_route(&self, route: &str) -> bool {
        let navigator = Arc::clone(&self.navigator);
        run_async(async move {
            for _ in 0..POLL_ATTEMPTS {
                if navigator.current().is_some_and(|view| view.route() == route) {
                    return true;
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            false
        })
    }

    /// Polls the board until `predicate` holds.
    pub fn wait_for_board(&self, predicate: impl Fn(&BoardState) -> bool) -> bool {
        let board = Arc::clone(self.gate.board());
        run_async(async move {
            for _ in 0..POLL_ATTEMPTS {
                if predicate(board.lock().await.state()) {
                    return true;
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            false
        })
    }
}

impl Default for GateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GateWorld {
    GateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
