//! Credential entry: sign in or create an account, then go to the board.

use crate::session::{
    domain::{AuthMode, Credentials, Principal, SessionDomainError, View},
    ports::{AuthError, AuthProvider, Navigator},
};
use std::sync::Arc;
use thiserror::Error;

/// Field values and feedback for the credential entry view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    mode: AuthMode,
    email: String,
    password: String,
    error: Option<String>,
}

impl CredentialForm {
    /// Creates an empty form in sign-in mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switches between sign-in and account creation.
    pub const fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Replaces the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replaces the password field.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Returns the email field.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the last provider error, shown verbatim.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Errors returned by a credential submission.
#[derive(Debug, Error)]
pub enum CredentialEntryError {
    /// A required field was empty; the provider was not contacted.
    #[error(transparent)]
    Domain(#[from] SessionDomainError),
    /// The provider rejected the request or was unreachable.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Submits credentials to the auth provider.
pub struct CredentialEntry<A, N>
where
    A: AuthProvider,
    N: Navigator,
{
    auth: Arc<A>,
    navigator: Arc<N>,
}

impl<A, N> Clone for CredentialEntry<A, N>
where
    A: AuthProvider,
    N: Navigator,
{
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
            navigator: Arc::clone(&self.navigator),
        }
    }
}

impl<A, N> CredentialEntry<A, N>
where
    A: AuthProvider,
    N: Navigator,
{
    /// Creates a credential entry service.
    #[must_use]
    pub const fn new(auth: Arc<A>, navigator: Arc<N>) -> Self {
        Self { auth, navigator }
    }

    /// Submits the form in its current mode.
    ///
    /// Empty fields are refused before the provider is contacted and leave
    /// the form untouched. Otherwise the previous error is cleared, the
    /// provider is called, and on success the navigator moves to the board.
    /// A provider failure is stored on the form unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialEntryError::Domain`] for empty fields and
    /// [`CredentialEntryError::Auth`] for provider failures.
    pub async fn submit(
        &self,
        form: &mut CredentialForm,
    ) -> Result<Principal, CredentialEntryError> {
        let credentials = Credentials::new(form.email.as_str(), form.password.as_str())?;
        form.error = None;

        let result = match form.mode {
            AuthMode::SignIn => self.auth.sign_in(&credentials).await,
            AuthMode::CreateAccount => self.auth.create_account(&credentials).await,
        };

        match result {
            Ok(principal) => {
                tracing::info!(mode = %form.mode, email = %principal.email(), "authenticated");
                self.navigator.redirect(View::Board);
                Ok(principal)
            }
            Err(err) => {
                tracing::warn!(mode = %form.mode, error = %err, "authentication failed");
                form.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
