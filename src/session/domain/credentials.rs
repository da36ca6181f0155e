//! Credential entry values.

use super::SessionDomainError;
use std::fmt;

/// Which provider operation a credential submission performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// Sign in to an existing account.
    #[default]
    SignIn,
    /// Create a new account.
    CreateAccount,
}

impl AuthMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::CreateAccount,
            Self::CreateAccount => Self::SignIn,
        }
    }

    /// Heading and submit label for the mode.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Login",
            Self::CreateAccount => "Sign Up",
        }
    }

    /// Label of the control that switches to the other mode.
    #[must_use]
    pub const fn toggle_prompt(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Sign Up",
            Self::CreateAccount => "Already have an account? Login",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Email and password pair submitted to the auth provider.
///
/// Only presence is checked here; format and strength rules belong to the
/// provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::MissingEmail`] or
    /// [`SessionDomainError::MissingPassword`] when a field is empty.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SessionDomainError> {
        let raw_email = email.into();
        if raw_email.trim().is_empty() {
            return Err(SessionDomainError::MissingEmail);
        }
        let raw_password = password.into();
        if raw_password.is_empty() {
            return Err(SessionDomainError::MissingPassword);
        }
        Ok(Self {
            email: raw_email,
            password: raw_password,
        })
    }

    /// Returns the email as entered.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password as entered.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
