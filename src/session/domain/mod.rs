//! Domain model for authentication sessions.
//!
//! Sessions are owned by the external auth provider. This module only
//! describes what is observed (a [`Principal`] or its absence) and what is
//! submitted ([`Credentials`] in an [`AuthMode`]).

mod credentials;
mod error;
mod principal;
mod view;

pub use credentials::{AuthMode, Credentials};
pub use error::SessionDomainError;
pub use principal::{EmailAddress, Principal, PrincipalId};
pub use view::View;
