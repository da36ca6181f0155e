//! Port contracts for authentication and navigation.

pub mod auth;
pub mod navigation;

pub use auth::{AuthError, AuthProvider, AuthResult, SessionReceiver};
pub use navigation::Navigator;
