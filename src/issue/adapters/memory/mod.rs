//! In-memory adapters for issue persistence.

mod store;

pub use store::InMemoryIssueStore;
