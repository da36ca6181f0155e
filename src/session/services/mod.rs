//! Application services for credential entry.

mod credential_entry;

pub use credential_entry::{CredentialEntry, CredentialEntryError, CredentialForm};
