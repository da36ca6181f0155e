//! In-memory adapters for authentication and navigation.

mod auth;
mod navigation;

pub use auth::{InMemoryAuthProvider, MIN_PASSWORD_LENGTH};
pub use navigation::RecordingNavigator;
