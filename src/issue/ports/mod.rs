//! Port contracts for issue persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the issue board.

pub mod store;

pub use store::{IssueStore, IssueStoreError, IssueStoreResult};
