//! Adapter implementations of the session ports.

pub mod memory;
