//! The issue board: view state, creation flow and session gating.
//!
//! Builds on [`crate::issue`] for records and storage and on
//! [`crate::session`] for the signed-in principal.

mod error;
pub mod services;
mod state;

pub use error::{BoardError, BoardResult};
pub use state::{BoardNotice, BoardState, DuplicateWarning, IssueForm};

#[cfg(test)]
mod tests;
