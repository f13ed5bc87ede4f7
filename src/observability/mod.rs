//! Observability subsystem
//!
//! - Structured logging through `tracing`
//! - Begin/complete scopes for startup phases
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. No background threads of its own

mod logging;
mod scope;

pub use logging::{default_level, env_filter, init_logging};
pub use scope::ObservationScope;
