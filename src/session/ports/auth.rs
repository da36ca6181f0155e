//! Port for the external authentication provider.

use crate::session::domain::{Credentials, Principal};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Result type for auth provider operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Receiver side of a session subscription.
///
/// Holds the current principal, or `None` when signed out. The initial value
/// is observable immediately after subscribing.
pub type SessionReceiver = watch::Receiver<Option<Principal>>;

/// Authentication provider contract.
///
/// The provider owns the session lifecycle; callers observe it through
/// [`AuthProvider::subscribe`] and never mutate it directly.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] with the provider's message when the
    /// account cannot be created, or [`AuthError::Unavailable`] when the
    /// provider cannot be reached.
    async fn create_account(&self, credentials: &Credentials) -> AuthResult<Principal>;

    /// Signs in to an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] with the provider's message for bad
    /// credentials, or [`AuthError::Unavailable`] when the provider cannot be
    /// reached.
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Principal>;

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unavailable`] when the provider cannot be reached.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Subscribes to session changes.
    fn subscribe(&self) -> SessionReceiver;
}

/// Errors returned by auth provider implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The provider refused the request. The message is shown to the user
    /// unmodified.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("auth provider unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    /// Creates a rejection carrying a provider message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Wraps a transport failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
