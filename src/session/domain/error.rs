//! Error types for session domain validation.

use thiserror::Error;

/// Errors returned while constructing session values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The email field was left empty.
    #[error("email is required")]
    MissingEmail,

    /// The password field was left empty.
    #[error("password is required")]
    MissingPassword,

    /// The email does not look like `local@domain`.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
