//! Step definitions for session gate scenarios.

pub mod when;
pub mod world;
