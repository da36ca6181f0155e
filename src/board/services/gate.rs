//! Session gate: keeps the board in step with the auth provider's session.

use crate::board::{error::BoardResult, services::board::IssueBoard};
use crate::issue::ports::IssueStore;
use crate::session::{
    domain::{Principal, View},
    ports::{AuthProvider, Navigator},
};
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};

/// Board shared between the gate's background task and its callers.
pub type SharedBoard<S> = Arc<Mutex<IssueBoard<S>>>;

/// What the gate did in response to a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// A principal is present and the issue list was reloaded.
    Loaded {
        /// Number of issues now cached.
        issue_count: usize,
    },
    /// No principal is present; the user was sent to the login view.
    RedirectedToLogin,
}

/// Reacts to session changes by loading the board or redirecting to login.
pub struct SessionGate<S, A, N>
where
    S: IssueStore,
    A: AuthProvider,
    N: Navigator,
{
    board: SharedBoard<S>,
    auth: Arc<A>,
    navigator: Arc<N>,
}

impl<S, A, N> Clone for SessionGate<S, A, N>
where
    S: IssueStore,
    A: AuthProvider,
    N: Navigator,
{
    fn clone(&self) -> Self {
        Self {
            board: Arc::clone(&self.board),
            auth: Arc::clone(&self.auth),
            navigator: Arc::clone(&self.navigator),
        }
    }
}

impl<S, A, N> SessionGate<S, A, N>
where
    S: IssueStore,
    A: AuthProvider,
    N: Navigator,
{
    /// Creates a gate over a shared board.
    #[must_use]
    pub const fn new(board: SharedBoard<S>, auth: Arc<A>, navigator: Arc<N>) -> Self {
        Self {
            board,
            auth,
            navigator,
        }
    }

    /// Returns the board this gate drives.
    #[must_use]
    pub const fn board(&self) -> &SharedBoard<S> {
        &self.board
    }

    /// Applies one observed session value.
    ///
    /// A present principal is recorded and the issue list reloaded. An absent
    /// one discards the board's view state and redirects to the login view.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::BoardError::Store`] when the reload fails. The
    /// principal is recorded regardless.
    pub async fn handle_change(&self, principal: Option<Principal>) -> BoardResult<GateAction> {
        let mut board = self.board.lock().await;
        match principal {
            Some(current) => {
                tracing::info!(email = %current.email(), "session active");
                board.set_principal(Some(current));
                let issue_count = board.load_issues().await?;
                Ok(GateAction::Loaded { issue_count })
            }
            None => {
                tracing::info!("no session, redirecting to login");
                board.clear_session();
                drop(board);
                self.navigator.redirect(View::Login);
                Ok(GateAction::RedirectedToLogin)
            }
        }
    }

    /// Ends the provider session. The running subscription sees the change
    /// and redirects to login.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::BoardError::Auth`] when the provider fails.
    pub async fn sign_out(&self) -> BoardResult<()> {
        self.auth.sign_out().await?;
        Ok(())
    }
}

impl<S, A, N> SessionGate<S, A, N>
where
    S: IssueStore + 'static,
    A: AuthProvider + 'static,
    N: Navigator + 'static,
{
    /// Subscribes to the provider and handles every session change on a
    /// background task, starting with the current value.
    ///
    /// The task runs until the returned subscription is dropped or the
    /// provider closes its channel.
    #[must_use = "dropping the subscription stops the gate"]
    pub fn spawn(&self) -> SessionSubscription {
        let mut receiver = self.auth.subscribe();
        let gate = self.clone();
        let handle = tokio::spawn(async move {
            loop {
                let principal = receiver.borrow_and_update().clone();
                if let Err(err) = gate.handle_change(principal).await {
                    tracing::warn!(error = %err, "session change handling failed");
                }
                if receiver.changed().await.is_err() {
                    tracing::debug!("session channel closed");
                    break;
                }
            }
        });
        SessionSubscription { handle }
    }
}

/// Handle to a running session subscription.
///
/// Dropping it stops the background task.
#[derive(Debug)]
pub struct SessionSubscription {
    handle: JoinHandle<()>,
}

impl SessionSubscription {
    /// Returns whether the background task is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the background task.
    pub fn unsubscribe(self) {
        self.handle.abort();
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
