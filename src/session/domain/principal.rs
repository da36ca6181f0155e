//! Authenticated principal and its identifiers.

use super::SessionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier assigned to an account by the auth provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    /// Creates a new random principal identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and lowercases an email address.
    ///
    /// Only the shape `local@domain.tld` is checked.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::InvalidEmail`] when the value has no
    /// local part, no dotted domain, or contains whitespace.
    pub fn parse(value: &str) -> Result<Self, SessionDomainError> {
        let normalized = value.trim().to_lowercase();
        let is_valid = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain
                        .split_once('.')
                        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            })
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(SessionDomainError::InvalidEmail(value.to_owned()));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The currently authenticated identity as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    id: PrincipalId,
    email: EmailAddress,
}

impl Principal {
    /// Creates a principal from provider-issued values.
    #[must_use]
    pub const fn new(id: PrincipalId, email: EmailAddress) -> Self {
        Self { id, email }
    }

    /// Returns the provider identifier.
    #[must_use]
    pub const fn id(&self) -> PrincipalId {
        self.id
    }

    /// Returns the principal's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
}
