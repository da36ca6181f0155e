//! Authentication sessions, credential entry and navigation.
//!
//! Session state belongs to an external auth provider; this module observes
//! it and submits credentials to it. Layout mirrors [`crate::issue`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
