//! `PostgreSQL` adapters for issue persistence.

mod models;
mod schema;
mod store;

pub use store::{IssuePgPool, PostgresIssueStore};
