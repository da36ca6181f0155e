//! Step definitions for issue board scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
