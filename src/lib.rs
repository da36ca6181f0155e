//! Issueboard: a minimal issue tracker core.
//!
//! Users authenticate through an external provider, create issues, list and
//! filter them, and are warned about likely duplicate titles. Rendering is
//! left to a presentation layer; view state is modelled as explicit structs
//! that such a layer drives.
//!
//! # Architecture
//!
//! Issueboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, auth and navigation
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`issue`]: Issue records, filters and the duplicate-title heuristic
//! - [`session`]: Principals, credential entry and the auth provider port
//! - [`board`]: Board view state, issue creation and the session gate
//! - [`config`]: Layered configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod config;
pub mod issue;
pub mod session;
pub mod telemetry;
