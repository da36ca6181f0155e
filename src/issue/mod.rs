//! Issue records, filtering and the duplicate-title heuristic.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//!
//! Orchestration of the issue board lives in [`crate::board`].

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
